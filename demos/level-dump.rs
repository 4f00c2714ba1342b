use std::error::Error;
use std::fs::File;

use flate2::read::GzDecoder;
use nbtbind::de::{from_reader_with_opts, DeOpts};
use nbtbind::{schema, ByteArray};
use serde::Serialize;

//
// Decodes the well known bigtest.nbt file and prints it as JSON.
//
// Usage: cargo run --example level-dump -- bigtest.nbt
//
// Set RUST_LOG=debug to see which tags were skipped.
//

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct Level {
    nested: Nested,
    byte_test: i8,
    int_test: i32,
    string_test: String,
    list_test_long: Vec<i64>,
    double_test: f64,
    float_test: f32,
    long_test: i64,
    list_test_compound: Vec<ListTest>,
    byte_array_test: ByteArray,
    short_test: i16,
}

schema!(Level {
    nested: "nested compound test",
    byte_test: "ByteTest",
    int_test: "IntTest",
    string_test: "StringTest",
    list_test_long: "listTest (long)",
    double_test: "DoubleTest",
    float_test: "FloatTest",
    long_test: "LongTest",
    list_test_compound: "listtest (compound)",
    byte_array_test: "bytearraytest (the first 1000 values of (n*n*255+n*7)%100, starting with n=0 (0, 62, 34, 16, 8, ...))",
    short_test: "ShortTest",
});

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct Nested {
    egg: Food,
    ham: Food,
}

schema!(Nested { egg, ham });

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct Food {
    name: String,
    value: f32,
}

schema!(Food { name, value });

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct ListTest {
    created_on: i64,
    name: String,
}

schema!(ListTest {
    created_on: "created-on",
    name,
});

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: level-dump <file.nbt>")?;
    let strict = std::env::args().any(|a| a == "--strict");

    // NBT files are normally compressed with GZip.
    let decoder = GzDecoder::new(File::open(path)?);

    let mut level = Level::default();
    from_reader_with_opts(decoder, &mut level, DeOpts::new().strict(strict))?;

    println!("{}", serde_json::to_string_pretty(&level)?);
    Ok(())
}
