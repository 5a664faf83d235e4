//! Raster primitives used to paint the icons.
//!
//! Shapes are addressed by inclusive integer bounding boxes `[x0, y0, x1, y1]`.
//! Anything falling outside the canvas is clipped, so callers may pass boxes
//! that hang off an edge.

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Fill a `width` x `height` canvas with a vertical linear gradient.
///
/// Row `y` gets `start * (1 - y / height) + end * (y / height)` per channel,
/// truncated towards zero.
pub fn linear_gradient(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let row_color = Rgb([
            lerp_channel(start[0], end[0], ratio),
            lerp_channel(start[1], end[1], ratio),
            lerp_channel(start[2], end[2], ratio),
        ]);

        for x in 0..width {
            img.put_pixel(x, y, row_color);
        }
    }

    img
}

fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    (start as f64 * (1.0 - ratio) + end as f64 * ratio) as u8
}

/// Paint a filled ellipse inscribed in the inclusive box `[x0, y0, x1, y1]`.
///
/// A pixel is painted when its center lies inside the ellipse. Inverted boxes
/// paint nothing.
pub fn fill_ellipse(img: &mut RgbImage, bbox: [i32; 4], color: Rgb<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }

    let center_x = (x0 + x1) as f32 / 2.0;
    let center_y = (y0 + y1) as f32 / 2.0;
    // Half a pixel of slack so the box edges themselves are covered
    let radius_x = (x1 - x0) as f32 / 2.0 + 0.5;
    let radius_y = (y1 - y0) as f32 / 2.0 + 0.5;

    let Some((left, top, right, bottom)) = clip(img, bbox) else {
        return;
    };

    for y in top..=bottom {
        for x in left..=right {
            let dx = (x as f32 - center_x) / radius_x;
            let dy = (y as f32 - center_y) / radius_y;

            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Paint a filled axis-aligned rectangle covering the inclusive box.
pub fn fill_rect(img: &mut RgbImage, bbox: [i32; 4], color: Rgb<u8>) {
    let [x0, y0, x1, y1] = bbox;
    if x1 < x0 || y1 < y0 {
        return;
    }

    let Some((left, top, right, bottom)) = clip(img, bbox) else {
        return;
    };

    for y in top..=bottom {
        for x in left..=right {
            img.put_pixel(x, y, color);
        }
    }
}

/// Intersect an inclusive box with the canvas, returning `None` when the box
/// lies entirely outside it.
fn clip(img: &RgbImage, [x0, y0, x1, y1]: [i32; 4]) -> Option<(u32, u32, u32, u32)> {
    let max_x = img.width() as i32 - 1;
    let max_y = img.height() as i32 - 1;

    if x1 < 0 || y1 < 0 || x0 > max_x || y0 > max_y {
        return None;
    }

    Some((
        x0.max(0) as u32,
        y0.max(0) as u32,
        x1.min(max_x) as u32,
        y1.min(max_y) as u32,
    ))
}

/// Build a single-channel mask holding a filled rounded rectangle that spans
/// the whole `size` x `size` square. Inside is 255, outside is 0.
pub fn rounded_rect_mask(size: u32, corner_radius: u32) -> GrayImage {
    let last = size as i64 - 1;
    let radius = (corner_radius as i64).min(size as i64 / 2);

    // Centers of the four corner arcs collapse onto these bounds
    let left = radius;
    let right = last - radius;
    let top = radius;
    let bottom = last - radius;

    ImageBuffer::from_fn(size, size, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let inside_core = (x >= left && x <= right) || (y >= top && y <= bottom);
        if inside_core {
            return Luma([255]);
        }

        let cx = if x < left { left } else { right };
        let cy = if y < top { top } else { bottom };
        let dx = x - cx;
        let dy = y - cy;

        if dx * dx + dy * dy <= radius * radius {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Use `mask` as the alpha channel of `img`, then composite the result over
/// an opaque `matte` and drop the alpha channel.
///
/// Pixels where the mask is zero come out exactly as `matte`. The mask must
/// have the same dimensions as the image.
pub fn apply_mask(img: &RgbImage, mask: &GrayImage, matte: Rgb<u8>) -> RgbImage {
    let masked: RgbaImage = ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Rgba([r, g, b, mask.get_pixel(x, y)[0]])
    });

    flatten(&masked, matte)
}

/// Composite an RGBA image over an opaque background color.
pub fn flatten(img: &RgbaImage, matte: Rgb<u8>) -> RgbImage {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        Rgb([
            blend_channel(r, matte[0], a),
            blend_channel(g, matte[1], a),
            blend_channel(b, matte[2], a),
        ])
    })
}

fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((fg as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
}
