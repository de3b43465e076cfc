use bytemuck::{Pod, Zeroable};
use enumcast::{
    Bridge, to_enum, to_i8, to_i16, to_i32, to_i64, to_u8, to_u16, to_u32, to_u64,
};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
struct Flag(u8);

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
struct Kind(i16);

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
struct Color(u32);

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
struct Handle(i64);

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
struct Rgb([u8; 3]);

#[test]
fn byte_readers_see_lowest_byte_only() {
    assert_eq!(to_u8(Flag(0xF8)), 0xF8);
    assert_eq!(to_i8(Flag(0xF8)), -8);

    assert_eq!(to_u8(Kind(0x12F8)), 0xF8);
    assert_eq!(to_i8(Kind(0x12F8)), -8);

    assert_eq!(to_u8(Color(0x1234_56F8)), 0xF8);
    assert_eq!(to_i8(Color(0x1234_56F8)), -8);

    assert_eq!(to_u8(Handle(0x0102_0304_0506_07F8)), 0xF8);
    assert_eq!(to_i8(Handle(0x0102_0304_0506_07F8)), -8);
}

#[test]
fn signed_readers_sign_extend_narrow_patterns() {
    let flag = Flag(0x80);

    assert_eq!(to_i16(flag), -128);
    assert_eq!(to_i32(flag), -128);
    assert_eq!(to_i64(flag), -128);

    let kind = Kind(-2);

    assert_eq!(to_i32(kind), -2);
    assert_eq!(to_i64(kind), -2);

    assert_eq!(to_i64(Color(0xFFFF_FFFE)), -2);
}

#[test]
fn unsigned_readers_zero_extend_narrow_patterns() {
    let flag = Flag(0x80);

    assert_eq!(to_u16(flag), 0x80);
    assert_eq!(to_u32(flag), 0x80);
    assert_eq!(to_u64(flag), 0x80);

    let kind = Kind(-2);

    assert_eq!(to_u16(kind), 0xFFFE);
    assert_eq!(to_u32(kind), 0xFFFE);
    assert_eq!(to_u64(kind), 0xFFFE);

    assert_eq!(to_u64(Color(0xFFFF_FFFE)), 0xFFFF_FFFE);
}

#[test]
fn narrow_readers_drop_high_bytes() {
    let handle = Handle(0x7FFF_FFFF_8000_FFFE);

    assert_eq!(to_u16(handle), 0xFFFE);
    assert_eq!(to_i16(handle), -2);
    assert_eq!(to_u32(handle), 0x8000_FFFE);
    assert_eq!(to_i32(handle), 0x8000_FFFEu32 as i32);

    let color = Color(0xABCD_0001);

    assert_eq!(to_u16(color), 1);
    assert_eq!(to_i16(color), 1);
}

#[test]
fn signed_value_widened_on_write_is_not_recovered() {
    let color = to_enum::<Color, _>(-1i8);

    assert_eq!(to_i8(color), -1);
    assert_eq!(to_i16(color), 255);
    assert_eq!(to_i32(color), 255);
    assert_eq!(to_i64(color), 255);
}

#[test]
fn u64_round_trip_restores_value() {
    for flag in [Flag(0), Flag(1), Flag(0x7F), Flag(0xFF)] {
        assert_eq!(to_enum::<Flag, _>(to_u64(flag)), flag);
    }

    for kind in [Kind(0), Kind(-1), Kind(i16::MIN), Kind(i16::MAX)] {
        assert_eq!(to_enum::<Kind, _>(to_u64(kind)), kind);
        assert_eq!(to_enum::<Kind, _>(to_i64(kind)), kind);
    }

    for color in [Color(0), Color(0xFF00), Color(u32::MAX)] {
        assert_eq!(to_enum::<Color, _>(to_u64(color)), color);
    }

    for handle in [Handle(0), Handle(-1), Handle(i64::MIN), Handle(i64::MAX)] {
        assert_eq!(to_enum::<Handle, _>(to_u64(handle)), handle);
        assert_eq!(to_enum::<Handle, _>(to_i64(handle)), handle);
    }
}

#[test]
fn bridge_readers_match_free_functions() {
    let kind = Kind(-300);

    assert_eq!(Bridge::<Kind>::to_i16(kind), to_i16(kind));
    assert_eq!(Bridge::<Kind>::to_u32(kind), to_u32(kind));
    assert_eq!(Bridge::<Kind>::to_i64(kind), -300);
}

#[test]
fn unsupported_width_reads_zero() {
    let rgb = Rgb([0xFF, 0xFF, 0xFF]);

    assert_eq!(to_u8(rgb), 0);
    assert_eq!(to_i8(rgb), 0);
    assert_eq!(to_u16(rgb), 0);
    assert_eq!(to_i16(rgb), 0);
    assert_eq!(to_u32(rgb), 0);
    assert_eq!(to_i32(rgb), 0);
    assert_eq!(to_u64(rgb), 0);
    assert_eq!(to_i64(rgb), 0);
}
