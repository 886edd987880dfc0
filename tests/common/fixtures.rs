//! Test fixtures: PNG frames built in memory.

use toonpass::rendering::{encode_png, Frame};

/// Pure red, turns into `RED_STYLIZED` under the default palette
pub const RED: [u8; 4] = [255, 0, 0, 255];

/// Bright red after one pass: hue 0 shifted to 10.67 deg, v 0.8, s 0.6
pub const RED_STYLIZED: [u8; 4] = [204, 103, 82, 255];

/// Low-saturation color that passes through unchanged
pub const GRAY: [u8; 4] = [128, 128, 128, 255];

/// A frame filled with one color
pub fn solid_frame(width: u32, height: u32, color: [u8; 4]) -> Frame {
    let rgba = color
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    Frame::new(width, height, rgba).expect("valid fixture frame")
}

/// A frame where every pixel has a different color
pub fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.push((x * 255 / width.max(1)) as u8);
            rgba.push((y * 255 / height.max(1)) as u8);
            rgba.push(200);
            rgba.push(255);
        }
    }
    Frame::new(width, height, rgba).expect("valid fixture frame")
}

/// PNG bytes for a solid frame
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    encode_png(&solid_frame(width, height, color)).expect("encode fixture")
}

/// PNG bytes for a gradient frame
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(&gradient_frame(width, height)).expect("encode fixture")
}
