use std::convert::TryFrom;

use crate::Tag;



macro_rules! check_tags {
    {$($tag:ident = $val:literal => $name:literal),* $(,)?} => {
        $(
            let byte: u8 = $val;
            assert_eq!(u8::from(Tag::$tag), byte);
            assert_eq!(Tag::try_from(byte), Ok(Tag::$tag));
            assert_eq!(Tag::$tag.to_string(), $name);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0 => "TAG_END",
        Byte = 1 => "TAG_BYTE",
        Short = 2 => "TAG_SHORT",
        Int = 3 => "TAG_INT",
        Long = 4 => "TAG_LONG",
        Float = 5 => "TAG_FLOAT",
        Double = 6 => "TAG_DOUBLE",
        ByteArray = 7 => "TAG_BYTE_ARRAY",
        String = 8 => "TAG_STRING",
        List = 9 => "TAG_LIST",
        Compound = 10 => "TAG_COMPOUND",
        IntArray = 11 => "TAG_INT_ARRAY",
    }

    for value in 12..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn undeclared_tag_name() {
    assert_eq!(Tag::declared_name(None), "TAG_UNKNOWN");
    assert_eq!(Tag::declared_name(Some(Tag::List)), "TAG_LIST");
}
