// css/tables.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// The substitution tables and fixed key material behind the CSS ciphers. All
// of these are embedded verbatim rather than generated at startup so that the
// bytes can be audited directly. CSS_TAB1 through CSS_TAB5 drive the keystream
// ciphers, CRYPT_TAB0 through CRYPT_TAB3 drive the authentication cipher.
//
// Derived tables keep their generation rules anyway: CSS_TAB3 repeats an
// 8-byte pattern 64 times, CSS_TAB4 is bit-reverse-within-byte, and CSS_TAB5
// is the bitwise complement of CSS_TAB4. CSS_TAB1 is a bijection over u8;
// unscrambling is inverted through it.

pub(crate) const CSS_TAB1: [u8; 256] = [
    0x31, 0x7f, 0xcd, 0xda, 0xb1, 0x86, 0x88, 0x7e, 0x2a, 0x41, 0x49, 0x39, 0x8d, 0x2e, 0x0b, 0xc6,
    0xaa, 0xc5, 0xd6, 0x5e, 0x7c, 0xd1, 0x33, 0x67, 0xb6, 0xc3, 0xcb, 0x1a, 0xfd, 0x37, 0xa5, 0xfc,
    0x7a, 0x53, 0x6f, 0x8f, 0xfb, 0x45, 0xca, 0xe1, 0x01, 0x6e, 0x52, 0xd9, 0x38, 0x24, 0x93, 0x99,
    0xf0, 0x56, 0x70, 0x1d, 0xe8, 0x43, 0x98, 0x5d, 0x5f, 0x6b, 0x3d, 0x58, 0x13, 0xc0, 0x8e, 0xa7,
    0xc2, 0x72, 0x71, 0x97, 0xce, 0xa1, 0xb2, 0x59, 0xfe, 0xe6, 0xdf, 0x05, 0x25, 0xee, 0x9a, 0x18,
    0x40, 0x1e, 0x5b, 0xde, 0xb8, 0x23, 0x10, 0xc1, 0x28, 0xc4, 0x14, 0xac, 0xa3, 0xef, 0x9d, 0x26,
    0xf2, 0x35, 0xf1, 0xdb, 0xdc, 0x2d, 0x83, 0x4c, 0x03, 0xe0, 0x21, 0x11, 0x92, 0xa6, 0x30, 0xbf,
    0xf4, 0x08, 0xf6, 0x95, 0xf5, 0x6a, 0x22, 0xd3, 0x15, 0x2f, 0xaf, 0x8c, 0xa8, 0x76, 0xbc, 0x48,
    0x9b, 0x20, 0xcc, 0xea, 0xa4, 0x34, 0x81, 0x60, 0x65, 0x46, 0xe3, 0x19, 0x55, 0x7b, 0x09, 0x54,
    0xbb, 0xa0, 0xd7, 0xa9, 0x89, 0x9c, 0xe2, 0x84, 0x04, 0x63, 0x91, 0x61, 0xd2, 0x2b, 0xe9, 0x3a,
    0xf9, 0x3f, 0xb0, 0x32, 0x62, 0xd5, 0xb3, 0xd4, 0xff, 0xc9, 0x02, 0x0e, 0x7d, 0xb4, 0x82, 0xcf,
    0x74, 0x5a, 0x6d, 0x77, 0x4e, 0x79, 0xe5, 0x80, 0x8a, 0x0d, 0xc7, 0x06, 0x1f, 0x9e, 0x78, 0x07,
    0x69, 0xf3, 0x12, 0x50, 0x0c, 0xd0, 0x68, 0x4b, 0x8b, 0x51, 0xa2, 0xec, 0x66, 0xeb, 0xad, 0x17,
    0x3c, 0x9f, 0x16, 0x27, 0x0f, 0x85, 0x1b, 0x6c, 0xba, 0x4a, 0x64, 0xed, 0x87, 0xbe, 0x3e, 0xb5,
    0x36, 0x4f, 0xb7, 0xfa, 0xd8, 0xbd, 0x1c, 0x29, 0xe7, 0xae, 0x47, 0x73, 0x5c, 0xab, 0x00, 0xdd,
    0x3b, 0xf8, 0x0a, 0x42, 0x57, 0x90, 0x96, 0xc8, 0x2c, 0x94, 0xb9, 0x75, 0xf7, 0x44, 0xe4, 0x4d,
];

pub(crate) const CSS_TAB2: [u8; 256] = [
    0xbb, 0x70, 0xbf, 0x07, 0x88, 0xf7, 0x35, 0x94, 0xa2, 0x3d, 0x91, 0xa4, 0xce, 0x45, 0x9a, 0x7f,
    0x89, 0x85, 0x95, 0x29, 0x0c, 0x2d, 0xaa, 0x94, 0x00, 0x38, 0xf6, 0x86, 0x01, 0x33, 0x6f, 0x48,
    0xd4, 0xd0, 0x7b, 0x14, 0x69, 0x2a, 0x50, 0x3c, 0x8f, 0xd5, 0x0a, 0x1a, 0x79, 0xad, 0x8d, 0xbb,
    0xf4, 0x5c, 0x21, 0x4a, 0x66, 0xa8, 0xc6, 0x3e, 0x86, 0x82, 0x5c, 0x43, 0xdd, 0xce, 0x74, 0xea,
    0x00, 0xf3, 0xf3, 0x0f, 0x8a, 0x23, 0x6d, 0x0e, 0xdc, 0x67, 0x3b, 0xa5, 0x94, 0x72, 0x62, 0xa7,
    0xce, 0x22, 0x23, 0x66, 0x1d, 0xd5, 0x61, 0xde, 0x47, 0x71, 0xb7, 0xa1, 0xc4, 0x32, 0x56, 0x86,
    0xf5, 0x32, 0x9f, 0x11, 0x25, 0xba, 0x84, 0xa1, 0x40, 0x4a, 0x9e, 0x5c, 0x55, 0x6a, 0x0e, 0xdb,
    0xcd, 0x2f, 0x16, 0x94, 0x69, 0x8c, 0x73, 0x0b, 0xfd, 0x5e, 0x80, 0xb8, 0xee, 0x35, 0x0b, 0xb7,
    0x6d, 0xe3, 0xf6, 0x32, 0x70, 0xc7, 0x8e, 0x8f, 0x75, 0xd7, 0xab, 0x58, 0xf6, 0x6e, 0x8c, 0xee,
    0xab, 0xdb, 0x6f, 0xed, 0x82, 0xa5, 0xf3, 0x5e, 0x5f, 0xa0, 0x2e, 0xa0, 0x93, 0xb1, 0x8e, 0x13,
    0x1e, 0x60, 0x70, 0x89, 0xa5, 0x22, 0x82, 0x6d, 0x31, 0x64, 0xd9, 0xb1, 0xad, 0x57, 0xd1, 0x79,
    0x1e, 0x7e, 0xa8, 0x89, 0xa0, 0xf9, 0xd9, 0x6f, 0x24, 0x8f, 0x3a, 0x70, 0xeb, 0x7d, 0xd5, 0x33,
    0xc1, 0x00, 0x86, 0x2f, 0xfa, 0xa4, 0x59, 0xd6, 0x2e, 0x4b, 0xa0, 0x7f, 0xb4, 0xfc, 0xd7, 0x14,
    0xdf, 0x71, 0x39, 0x80, 0xfb, 0x5f, 0x1e, 0xd5, 0x05, 0x83, 0x1b, 0x41, 0x2e, 0x71, 0xd8, 0xaf,
    0x0e, 0x1c, 0xaf, 0x3c, 0xa8, 0x24, 0x0a, 0x60, 0x22, 0xe2, 0x79, 0xd9, 0x41, 0x35, 0x96, 0x56,
    0xa6, 0x0b, 0x99, 0xe9, 0xca, 0xaf, 0xba, 0x2a, 0xbb, 0xd4, 0x4a, 0x2a, 0x94, 0x65, 0x90, 0x1e,
];

pub(crate) const CSS_TAB3: [u8; 512] = [
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
];

pub(crate) const CSS_TAB4: [u8; 256] = [
    0x00, 0x80, 0x40, 0xc0, 0x20, 0xa0, 0x60, 0xe0, 0x10, 0x90, 0x50, 0xd0, 0x30, 0xb0, 0x70, 0xf0,
    0x08, 0x88, 0x48, 0xc8, 0x28, 0xa8, 0x68, 0xe8, 0x18, 0x98, 0x58, 0xd8, 0x38, 0xb8, 0x78, 0xf8,
    0x04, 0x84, 0x44, 0xc4, 0x24, 0xa4, 0x64, 0xe4, 0x14, 0x94, 0x54, 0xd4, 0x34, 0xb4, 0x74, 0xf4,
    0x0c, 0x8c, 0x4c, 0xcc, 0x2c, 0xac, 0x6c, 0xec, 0x1c, 0x9c, 0x5c, 0xdc, 0x3c, 0xbc, 0x7c, 0xfc,
    0x02, 0x82, 0x42, 0xc2, 0x22, 0xa2, 0x62, 0xe2, 0x12, 0x92, 0x52, 0xd2, 0x32, 0xb2, 0x72, 0xf2,
    0x0a, 0x8a, 0x4a, 0xca, 0x2a, 0xaa, 0x6a, 0xea, 0x1a, 0x9a, 0x5a, 0xda, 0x3a, 0xba, 0x7a, 0xfa,
    0x06, 0x86, 0x46, 0xc6, 0x26, 0xa6, 0x66, 0xe6, 0x16, 0x96, 0x56, 0xd6, 0x36, 0xb6, 0x76, 0xf6,
    0x0e, 0x8e, 0x4e, 0xce, 0x2e, 0xae, 0x6e, 0xee, 0x1e, 0x9e, 0x5e, 0xde, 0x3e, 0xbe, 0x7e, 0xfe,
    0x01, 0x81, 0x41, 0xc1, 0x21, 0xa1, 0x61, 0xe1, 0x11, 0x91, 0x51, 0xd1, 0x31, 0xb1, 0x71, 0xf1,
    0x09, 0x89, 0x49, 0xc9, 0x29, 0xa9, 0x69, 0xe9, 0x19, 0x99, 0x59, 0xd9, 0x39, 0xb9, 0x79, 0xf9,
    0x05, 0x85, 0x45, 0xc5, 0x25, 0xa5, 0x65, 0xe5, 0x15, 0x95, 0x55, 0xd5, 0x35, 0xb5, 0x75, 0xf5,
    0x0d, 0x8d, 0x4d, 0xcd, 0x2d, 0xad, 0x6d, 0xed, 0x1d, 0x9d, 0x5d, 0xdd, 0x3d, 0xbd, 0x7d, 0xfd,
    0x03, 0x83, 0x43, 0xc3, 0x23, 0xa3, 0x63, 0xe3, 0x13, 0x93, 0x53, 0xd3, 0x33, 0xb3, 0x73, 0xf3,
    0x0b, 0x8b, 0x4b, 0xcb, 0x2b, 0xab, 0x6b, 0xeb, 0x1b, 0x9b, 0x5b, 0xdb, 0x3b, 0xbb, 0x7b, 0xfb,
    0x07, 0x87, 0x47, 0xc7, 0x27, 0xa7, 0x67, 0xe7, 0x17, 0x97, 0x57, 0xd7, 0x37, 0xb7, 0x77, 0xf7,
    0x0f, 0x8f, 0x4f, 0xcf, 0x2f, 0xaf, 0x6f, 0xef, 0x1f, 0x9f, 0x5f, 0xdf, 0x3f, 0xbf, 0x7f, 0xff,
];

pub(crate) const CSS_TAB5: [u8; 256] = [
    0xff, 0x7f, 0xbf, 0x3f, 0xdf, 0x5f, 0x9f, 0x1f, 0xef, 0x6f, 0xaf, 0x2f, 0xcf, 0x4f, 0x8f, 0x0f,
    0xf7, 0x77, 0xb7, 0x37, 0xd7, 0x57, 0x97, 0x17, 0xe7, 0x67, 0xa7, 0x27, 0xc7, 0x47, 0x87, 0x07,
    0xfb, 0x7b, 0xbb, 0x3b, 0xdb, 0x5b, 0x9b, 0x1b, 0xeb, 0x6b, 0xab, 0x2b, 0xcb, 0x4b, 0x8b, 0x0b,
    0xf3, 0x73, 0xb3, 0x33, 0xd3, 0x53, 0x93, 0x13, 0xe3, 0x63, 0xa3, 0x23, 0xc3, 0x43, 0x83, 0x03,
    0xfd, 0x7d, 0xbd, 0x3d, 0xdd, 0x5d, 0x9d, 0x1d, 0xed, 0x6d, 0xad, 0x2d, 0xcd, 0x4d, 0x8d, 0x0d,
    0xf5, 0x75, 0xb5, 0x35, 0xd5, 0x55, 0x95, 0x15, 0xe5, 0x65, 0xa5, 0x25, 0xc5, 0x45, 0x85, 0x05,
    0xf9, 0x79, 0xb9, 0x39, 0xd9, 0x59, 0x99, 0x19, 0xe9, 0x69, 0xa9, 0x29, 0xc9, 0x49, 0x89, 0x09,
    0xf1, 0x71, 0xb1, 0x31, 0xd1, 0x51, 0x91, 0x11, 0xe1, 0x61, 0xa1, 0x21, 0xc1, 0x41, 0x81, 0x01,
    0xfe, 0x7e, 0xbe, 0x3e, 0xde, 0x5e, 0x9e, 0x1e, 0xee, 0x6e, 0xae, 0x2e, 0xce, 0x4e, 0x8e, 0x0e,
    0xf6, 0x76, 0xb6, 0x36, 0xd6, 0x56, 0x96, 0x16, 0xe6, 0x66, 0xa6, 0x26, 0xc6, 0x46, 0x86, 0x06,
    0xfa, 0x7a, 0xba, 0x3a, 0xda, 0x5a, 0x9a, 0x1a, 0xea, 0x6a, 0xaa, 0x2a, 0xca, 0x4a, 0x8a, 0x0a,
    0xf2, 0x72, 0xb2, 0x32, 0xd2, 0x52, 0x92, 0x12, 0xe2, 0x62, 0xa2, 0x22, 0xc2, 0x42, 0x82, 0x02,
    0xfc, 0x7c, 0xbc, 0x3c, 0xdc, 0x5c, 0x9c, 0x1c, 0xec, 0x6c, 0xac, 0x2c, 0xcc, 0x4c, 0x8c, 0x0c,
    0xf4, 0x74, 0xb4, 0x34, 0xd4, 0x54, 0x94, 0x14, 0xe4, 0x64, 0xa4, 0x24, 0xc4, 0x44, 0x84, 0x04,
    0xf8, 0x78, 0xb8, 0x38, 0xd8, 0x58, 0x98, 0x18, 0xe8, 0x68, 0xa8, 0x28, 0xc8, 0x48, 0x88, 0x08,
    0xf0, 0x70, 0xb0, 0x30, 0xd0, 0x50, 0x90, 0x10, 0xe0, 0x60, 0xa0, 0x20, 0xc0, 0x40, 0x80, 0x00,
];

pub(crate) const CRYPT_TAB0: [u8; 256] = [
    0xc1, 0x03, 0xa2, 0x9f, 0x2b, 0xc5, 0xa4, 0x99, 0x0f, 0xc8, 0x51, 0x9a, 0x6d, 0xb6, 0x4c, 0xe5,
    0x25, 0x64, 0x26, 0xfa, 0x35, 0x3d, 0x4e, 0x57, 0x0e, 0x93, 0xe9, 0xdd, 0x6b, 0x0d, 0x59, 0xab,
    0xb3, 0x1d, 0x60, 0x40, 0xf5, 0xee, 0x86, 0x52, 0x61, 0x29, 0xa8, 0xc3, 0xad, 0x78, 0xf2, 0x81,
    0x8e, 0xcd, 0x45, 0xdf, 0xd6, 0x5c, 0x34, 0x2f, 0x44, 0x3c, 0x3f, 0xfe, 0x87, 0xf0, 0x5d, 0x01,
    0x9e, 0xd9, 0xca, 0x2e, 0x95, 0xbb, 0x2c, 0xcc, 0x17, 0x8c, 0x06, 0xac, 0x80, 0xe7, 0x9d, 0xbc,
    0x1e, 0x85, 0xa1, 0x7e, 0xb7, 0x6c, 0x16, 0xe2, 0x65, 0x5b, 0x4a, 0xd5, 0x1b, 0x92, 0x96, 0xf1,
    0xff, 0xd7, 0xec, 0xb2, 0x09, 0xc7, 0x2a, 0x3b, 0xd1, 0xd3, 0x72, 0x84, 0xde, 0x36, 0x83, 0x00,
    0x82, 0x79, 0xd4, 0x9b, 0x71, 0x7c, 0x2d, 0x11, 0xd2, 0x27, 0xbf, 0xe0, 0x39, 0x48, 0x4b, 0x43,
    0x23, 0x1c, 0x3e, 0x58, 0xe6, 0x8a, 0xc6, 0xed, 0xdb, 0xfc, 0x94, 0xd8, 0x32, 0x18, 0x47, 0x24,
    0xd0, 0x1f, 0xa6, 0xe1, 0x4f, 0x90, 0x63, 0xaa, 0x14, 0xb8, 0x88, 0x41, 0xda, 0x67, 0x89, 0xcf,
    0x8d, 0x68, 0xcb, 0x6f, 0xc9, 0xb1, 0xfb, 0x70, 0xae, 0x69, 0x97, 0x5e, 0x22, 0x07, 0x0c, 0xf9,
    0x9c, 0x53, 0xb4, 0x1a, 0x73, 0xf3, 0x04, 0x02, 0xba, 0x19, 0x7f, 0xf4, 0x30, 0xb5, 0xc4, 0xa3,
    0x98, 0x50, 0x33, 0x08, 0xbd, 0x05, 0x5a, 0x7d, 0x6a, 0x76, 0x66, 0x75, 0x0b, 0xf8, 0x21, 0xa5,
    0x10, 0x8f, 0xa7, 0x49, 0x54, 0xb0, 0x6e, 0x7a, 0x15, 0xf6, 0xa9, 0x55, 0x38, 0xf7, 0x77, 0x3a,
    0x0a, 0xc2, 0xb9, 0xdc, 0x62, 0xeb, 0xaf, 0xef, 0x74, 0xc0, 0xe4, 0x5f, 0xe3, 0x8b, 0xce, 0x13,
    0x56, 0xfd, 0x37, 0x91, 0xea, 0x42, 0xbe, 0xa0, 0x31, 0x12, 0x28, 0xe8, 0x46, 0x7b, 0x4d, 0x20,
];

pub(crate) const CRYPT_TAB1: [u8; 256] = [
    0xe7, 0xf6, 0x37, 0x1c, 0x6f, 0x38, 0xbb, 0xde, 0x78, 0xef, 0x75, 0x8e, 0x5e, 0x07, 0xb8, 0x77,
    0x2c, 0x29, 0xe9, 0x46, 0x58, 0xe0, 0x6d, 0x5b, 0xdf, 0x0d, 0xfd, 0x6c, 0xe8, 0xf8, 0xc6, 0xd2,
    0x20, 0xcb, 0x1a, 0x01, 0xaf, 0xc0, 0x3d, 0x22, 0x8c, 0xa2, 0xed, 0xba, 0xa7, 0x67, 0x82, 0xe5,
    0x61, 0x7e, 0x43, 0x4b, 0xc2, 0x8a, 0xc8, 0x85, 0xdb, 0x0f, 0x0c, 0x48, 0xc9, 0xd4, 0xa4, 0xd0,
    0xeb, 0xb9, 0xae, 0x9c, 0x3e, 0xf3, 0xdc, 0x15, 0x7a, 0x84, 0xcc, 0xda, 0x97, 0x65, 0x1e, 0x5f,
    0x4d, 0x56, 0x2f, 0xe1, 0xd5, 0xb1, 0xfe, 0x05, 0xb3, 0x5c, 0x36, 0xf5, 0x6a, 0xb2, 0x13, 0x32,
    0x88, 0x68, 0xfc, 0x96, 0x1d, 0x89, 0x09, 0x63, 0x7f, 0xa3, 0x80, 0x18, 0x02, 0x35, 0xff, 0x3b,
    0x8f, 0xb5, 0xa9, 0x0a, 0x44, 0x60, 0x92, 0x53, 0xaa, 0x28, 0x08, 0x00, 0x7d, 0x1f, 0x81, 0xa5,
    0x1b, 0x59, 0x74, 0x57, 0x2b, 0xbd, 0x70, 0x14, 0x6b, 0xc3, 0x7c, 0xc5, 0x98, 0x7b, 0xd9, 0xdd,
    0x66, 0xce, 0x2e, 0x39, 0x9e, 0x9d, 0xbc, 0x91, 0x93, 0xc4, 0x31, 0x83, 0x3a, 0xfb, 0xbf, 0x99,
    0x69, 0x3c, 0xf0, 0xb6, 0x90, 0x9a, 0xcf, 0x40, 0xf9, 0xe4, 0x86, 0x9b, 0x4e, 0xf1, 0x9f, 0x54,
    0x33, 0x03, 0x4f, 0x87, 0x55, 0x24, 0x06, 0x76, 0xb4, 0x64, 0x2a, 0xea, 0x19, 0xa1, 0xc7, 0x71,
    0xe6, 0x3f, 0x41, 0xf2, 0xa8, 0xb0, 0x42, 0xb7, 0x79, 0xec, 0xd3, 0xbe, 0xab, 0xcd, 0x62, 0xd6,
    0xee, 0xad, 0xa6, 0x0b, 0x21, 0x72, 0xe2, 0x4a, 0x27, 0xca, 0x11, 0xe3, 0x5d, 0x49, 0x6e, 0x23,
    0xf7, 0x8d, 0x95, 0xa0, 0x30, 0x26, 0x25, 0x5a, 0x94, 0x51, 0x45, 0x12, 0xac, 0xd7, 0x47, 0x52,
    0x4c, 0x16, 0x04, 0xd1, 0xc1, 0x0e, 0x50, 0x2d, 0xfa, 0xf4, 0x34, 0x8b, 0x10, 0x73, 0xd8, 0x17,
];

pub(crate) const CRYPT_TAB2: [u8; 256] = [
    0xcd, 0xe7, 0x19, 0x3f, 0xe0, 0x9d, 0xfc, 0x1a, 0xdc, 0x56, 0xfb, 0x7e, 0x79, 0x30, 0x22, 0x8f,
    0xf4, 0xe2, 0x0b, 0x9a, 0x86, 0x89, 0xb4, 0xbc, 0xa9, 0x30, 0x1b, 0x54, 0x0a, 0x21, 0x9e, 0x2a,
    0x4c, 0xee, 0x16, 0x5c, 0x83, 0x3e, 0xad, 0x0d, 0x6b, 0x58, 0x83, 0xcb, 0x6c, 0x71, 0x04, 0xc4,
    0x4e, 0xb6, 0x07, 0xa9, 0xbc, 0x18, 0xa7, 0x5e, 0x7a, 0xda, 0xe2, 0x66, 0x66, 0xdb, 0xf3, 0x11,
    0x30, 0xa3, 0x6f, 0x62, 0xd9, 0x30, 0x22, 0xc2, 0xec, 0x7e, 0xa7, 0x68, 0x7f, 0xd9, 0xc9, 0x83,
    0xe9, 0xe2, 0x9d, 0x2c, 0x40, 0x63, 0x5b, 0x0e, 0x99, 0xd2, 0x00, 0xd3, 0xff, 0xa7, 0xa6, 0x4d,
    0x2f, 0x5e, 0x9e, 0x69, 0x19, 0x4a, 0x53, 0xd4, 0x18, 0x20, 0xde, 0x6a, 0xeb, 0x3f, 0x68, 0x63,
    0x7b, 0xc0, 0x43, 0x3c, 0x4c, 0x42, 0xc8, 0x67, 0xbe, 0x72, 0xee, 0xb2, 0x0c, 0x5c, 0xaf, 0x77,
    0x03, 0x75, 0x1b, 0x89, 0x7d, 0x64, 0x39, 0xd9, 0xa5, 0x94, 0xa1, 0xec, 0xe9, 0x7b, 0xda, 0xfd,
    0xbd, 0xa7, 0x74, 0xf1, 0x16, 0x8d, 0xe5, 0xff, 0xa1, 0x11, 0x24, 0x1b, 0xc7, 0xd5, 0x07, 0x27,
    0x62, 0x42, 0x5d, 0xd9, 0x3c, 0x57, 0xcb, 0x6a, 0x4c, 0x34, 0x67, 0x04, 0xaf, 0x65, 0x16, 0xe9,
    0x67, 0xef, 0xa5, 0x63, 0xd7, 0x1d, 0xaa, 0x6f, 0xfa, 0x07, 0x19, 0x28, 0x67, 0xe7, 0xa5, 0xf5,
    0x05, 0x1b, 0xdc, 0x72, 0x8e, 0xf9, 0x01, 0x1f, 0xc5, 0x57, 0xa8, 0xcb, 0x76, 0xd5, 0x14, 0xbe,
    0x32, 0xf1, 0x51, 0xa9, 0xc7, 0xc8, 0x10, 0x4e, 0x81, 0xad, 0x45, 0xef, 0x23, 0x6b, 0x82, 0x78,
    0xa4, 0x5a, 0x11, 0x6b, 0xaa, 0x24, 0xd4, 0x8f, 0xc7, 0x55, 0xdd, 0x58, 0x76, 0xa4, 0xcd, 0x15,
    0xd4, 0x03, 0xed, 0xdc, 0x1e, 0x68, 0x0e, 0x35, 0xee, 0x59, 0x21, 0x89, 0x35, 0x3a, 0x95, 0x49,
];

pub(crate) const CRYPT_TAB3: [u8; 256] = [
    0x53, 0xab, 0x8f, 0x04, 0x3f, 0x42, 0x6a, 0xba, 0xad, 0xde, 0x82, 0x48, 0xa6, 0x98, 0xdf, 0x20,
    0x11, 0xe0, 0x63, 0x32, 0xe1, 0x3c, 0xdb, 0x06, 0xfd, 0xc0, 0xc7, 0x9b, 0xf2, 0x4c, 0xea, 0x03,
    0x5b, 0x88, 0x90, 0xbb, 0x0c, 0xa0, 0xa2, 0xcc, 0x01, 0xc0, 0x6a, 0xa2, 0x09, 0x4e, 0x27, 0xaf,
    0x32, 0xeb, 0x50, 0xbf, 0xf3, 0x27, 0xa8, 0x1a, 0x1c, 0x06, 0x07, 0x5b, 0x7e, 0x37, 0xe2, 0x13,
    0x5a, 0x0e, 0x9f, 0x1d, 0x8a, 0x46, 0x9b, 0xbf, 0x71, 0x79, 0xf7, 0x85, 0xa4, 0x5b, 0x26, 0xde,
    0x55, 0xba, 0x37, 0x73, 0x83, 0x36, 0xe3, 0x4b, 0xe4, 0xc0, 0x56, 0xa0, 0x8d, 0xd3, 0xbd, 0x7e,
    0x67, 0x75, 0x94, 0x21, 0x52, 0xec, 0xad, 0x0c, 0x16, 0x41, 0xff, 0xe9, 0x0e, 0x76, 0x34, 0x24,
    0x93, 0x86, 0xf0, 0x45, 0x29, 0x21, 0xe3, 0x11, 0x6c, 0x24, 0x8d, 0x60, 0xb9, 0xda, 0xd4, 0xbd,
    0x9b, 0xf5, 0x47, 0xc0, 0xfc, 0x4a, 0x30, 0x2a, 0x08, 0x50, 0x5c, 0xc5, 0xe0, 0x56, 0xa9, 0xf9,
    0x04, 0x88, 0x54, 0x2e, 0x7d, 0xa0, 0x00, 0xe5, 0xcd, 0x6b, 0x85, 0x96, 0x97, 0x02, 0x7e, 0x47,
    0x0e, 0xc6, 0x91, 0xf1, 0x1f, 0x18, 0x7c, 0x92, 0x5e, 0xdd, 0xe5, 0x11, 0xb2, 0xb5, 0xde, 0xd6,
    0xbf, 0xf6, 0x39, 0x26, 0x16, 0x6a, 0x92, 0x3f, 0x1f, 0xcd, 0x15, 0x37, 0xc2, 0x05, 0x13, 0x95,
    0xd8, 0x1f, 0x49, 0xac, 0x55, 0x0e, 0xea, 0xbb, 0x31, 0x22, 0x72, 0xc6, 0x1b, 0x49, 0x2a, 0x32,
    0xdd, 0x09, 0x79, 0x23, 0x8d, 0x39, 0xf1, 0x96, 0x79, 0x83, 0x15, 0x3d, 0xd0, 0x99, 0xec, 0x1e,
    0x10, 0x3a, 0x46, 0xea, 0x33, 0xe3, 0xd1, 0x1e, 0x99, 0x56, 0xdb, 0xdb, 0xb4, 0xcc, 0xe4, 0x86,
    0x75, 0xf9, 0xeb, 0x1f, 0x7a, 0xc4, 0x75, 0x62, 0xf4, 0xc3, 0x5d, 0xa0, 0x5a, 0x78, 0x5f, 0x5a,
];

/// The 5-byte secret mixed into the authentication LFSR seeds.
pub(crate) const SECRET: [u8; 5] = [0x55, 0xd6, 0xc4, 0xc5, 0x28];

/// Per-handshake tweak bytes, one of 32 variations on the authentication
/// cipher selected by the variant index.
pub(crate) const VARIANTS: [u8; 32] = [
    0xb7, 0x74, 0x85, 0xd0, 0xcc, 0xdb, 0xca, 0x73, 0x03, 0xfe, 0x31, 0x03, 0x52, 0xe0, 0xb7, 0x42,
    0x63, 0x16, 0xf2, 0x2a, 0x79, 0x52, 0xff, 0x1b, 0x7a, 0x11, 0xca, 0x1a, 0x9b, 0x40, 0xad, 0x01,
];

/// How the 10 challenge bytes are reordered before encryption, one row per
/// key type.
pub(crate) const PERM_CHALLENGE: [[u8; 10]; 3] = [
    [1, 3, 0, 7, 5, 2, 9, 6, 4, 8],
    [6, 1, 9, 3, 8, 5, 7, 4, 0, 2],
    [4, 0, 3, 5, 7, 2, 8, 6, 1, 9],
];

/// Variant remapping for the two bus key types. The authentication key type
/// uses the caller's variant as-is.
pub(crate) const PERM_VARIANT: [[u8; 32]; 2] = [
    [
        0x0a, 0x08, 0x0e, 0x0c, 0x0b, 0x09, 0x0f, 0x0d, 0x1a, 0x18, 0x1e, 0x1c, 0x1b, 0x19, 0x1f,
        0x1d, 0x02, 0x00, 0x06, 0x04, 0x03, 0x01, 0x07, 0x05, 0x12, 0x10, 0x16, 0x14, 0x13, 0x11,
        0x17, 0x15,
    ],
    [
        0x12, 0x1a, 0x16, 0x1e, 0x02, 0x0a, 0x06, 0x0e, 0x10, 0x18, 0x14, 0x1c, 0x00, 0x08, 0x04,
        0x0c, 0x13, 0x1b, 0x17, 0x1f, 0x03, 0x0b, 0x07, 0x0f, 0x11, 0x19, 0x15, 0x1d, 0x01, 0x09,
        0x05, 0x0d,
    ],
];
