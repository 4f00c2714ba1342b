#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtbind::de::{from_bytes_with_opts, DeOpts};
use nbtbind::{schema, ByteArray, IntArray};

#[derive(Default)]
struct Level {
    name: String,
    heights: IntArray,
    blocks: ByteArray,
    sections: Vec<Section>,
    tags: Vec<Vec<String>>,
}

#[derive(Default)]
struct Section {
    y: i8,
    palette: Vec<String>,
    sky_light: ByteArray,
}

schema!(Level {
    name: "Name",
    heights: "Heights",
    blocks: "Blocks",
    sections: "Sections",
    tags: "Tags",
});

schema!(Section {
    y: "Y",
    palette: "Palette",
    sky_light: "SkyLight",
});

fuzz_target!(|data: &[u8]| {
    let mut level = Level::default();
    let _ = from_bytes_with_opts(data, &mut level, DeOpts::new().max_depth(64));
});
