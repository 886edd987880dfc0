//! PNG decoding to RGBA8 frames and optimized RGBA8 encoding.

use std::io::Cursor;

use crate::error::RenderError;

use super::frame::{check_dimensions, Frame};

/// Decode a PNG of any color type into an RGBA8 frame.
///
/// Palettes and sub-byte depths are expanded, 16-bit channels stripped to 8.
/// Grey is replicated into RGB and missing alpha filled with 255. Dimensions
/// are checked before the pixel buffer is allocated.
pub fn decode_png(data: &[u8]) -> Result<Frame, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    check_dimensions(width, height)?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let output = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    buf.truncate(output.buffer_size());

    if output.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::PngDecode(format!(
            "unexpected bit depth after expansion: {:?}",
            output.bit_depth
        )));
    }

    let rgba = match output.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        other => {
            return Err(RenderError::PngDecode(format!(
                "unexpected color type after expansion: {other:?}"
            )))
        }
    };

    tracing::trace!(width, height, color_type = ?output.color_type, "Decoded PNG");
    Frame::new(width, height, rgba)
}

/// Encode a frame as an RGBA8 PNG and re-compress it with oxipng.
///
/// Falls back to the fast encoding if optimization fails.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, RenderError> {
    let png_bytes = encode_fast(frame)?;

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping fast encoding");
            Ok(png_bytes)
        }
    }
}

/// Encode with fast settings; oxipng picks filters and compression later.
fn encode_fast(frame: &Frame) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, frame.width(), frame.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(frame.rgba())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
