//! Magic-byte signatures
//!
//! Signature definitions for the built-in oracle. MIME names follow the
//! ones `file --mime-type` prints.

use crate::domain::entities::FileSignature;

/// Creates the PNG signature
pub fn png_signature() -> FileSignature {
    FileSignature::new(
        "image/png",
        [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
    )
}

/// Creates the JPEG signature (SOI followed by any marker)
pub fn jpeg_signature() -> FileSignature {
    FileSignature::new("image/jpeg", [0xFF, 0xD8, 0xFF])
}

/// Creates GIF signatures (both 87a and 89a)
pub fn gif_signatures() -> Vec<FileSignature> {
    vec![
        FileSignature::new("image/gif", *b"GIF87a"),
        FileSignature::new("image/gif", *b"GIF89a"),
    ]
}

/// Creates the PDF signature
pub fn pdf_signature() -> FileSignature {
    FileSignature::new("application/pdf", *b"%PDF-")
}

/// Creates ZIP signatures: local file header, empty archive, spanned archive
pub fn zip_signatures() -> Vec<FileSignature> {
    vec![
        FileSignature::new("application/zip", *b"PK\x03\x04"),
        FileSignature::new("application/zip", *b"PK\x05\x06"),
        FileSignature::new("application/zip", *b"PK\x07\x08"),
    ]
}

/// Creates ISO base media signatures.
///
/// The `ftyp` box sits at offset 4; its major brand tells MP4 apart from
/// its QuickTime and 3GPP relatives.
pub fn iso_media_signatures() -> Vec<FileSignature> {
    let mp4_brands: [&[u8; 4]; 7] = [
        b"isom", b"iso2", b"iso5", b"mp41", b"mp42", b"avc1", b"dash",
    ];

    let mut signatures: Vec<FileSignature> = mp4_brands
        .iter()
        .map(|brand| ftyp_signature("video/mp4", brand))
        .collect();
    signatures.push(ftyp_signature("video/quicktime", b"qt  "));
    signatures.push(ftyp_signature("video/x-m4v", b"M4V "));
    signatures.push(ftyp_signature("audio/x-m4a", b"M4A "));
    signatures.push(ftyp_signature("video/3gpp", b"3gp4"));
    signatures.push(ftyp_signature("video/3gpp", b"3gp5"));
    signatures
}

fn ftyp_signature(mime: &'static str, brand: &[u8; 4]) -> FileSignature {
    let mut magic = b"ftyp".to_vec();
    magic.extend_from_slice(brand);
    FileSignature::new(mime, magic).with_offset(4)
}

/// Signatures of common types checkFile does not support, so they are
/// reported by name rather than as generic binary data
pub fn other_signatures() -> Vec<FileSignature> {
    vec![
        FileSignature::new("application/gzip", [0x1F, 0x8B]),
        FileSignature::new("application/x-7z-compressed", *b"7z\xBC\xAF\x27\x1C"),
        FileSignature::new("application/x-executable", *b"\x7FELF"),
        FileSignature::new("image/tiff", *b"II*\x00"),
        FileSignature::new("image/tiff", *b"MM\x00*"),
    ]
}

/// Returns every signature known to the built-in oracle
pub fn all_signatures() -> Vec<FileSignature> {
    let mut signatures = vec![png_signature(), jpeg_signature(), pdf_signature()];
    signatures.extend(gif_signatures());
    signatures.extend(zip_signatures());
    signatures.extend(iso_media_signatures());
    signatures.extend(other_signatures());
    signatures
}
