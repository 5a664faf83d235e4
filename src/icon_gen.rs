use crate::contents_json::{write_contents_json, ContentsFile, ImageEntry};
use crate::draw::{apply_mask, fill_ellipse, fill_rect, linear_gradient, rounded_rect_mask};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where the icons land when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "SilasLearnsChinese/Assets.xcassets/AppIcon.appiconset";

/// Geometry is authored against a 120px canvas and scaled from there.
const REFERENCE_SIZE: f64 = 120.0;
const CORNER_RADIUS_RATIO: f64 = 0.2;

pub const GRADIENT_START: Rgb<u8> = Rgb([85, 170, 85]);
pub const GRADIENT_END: Rgb<u8> = Rgb([135, 206, 235]);
/// Opaque color the rounded icon is flattened onto.
pub const MATTE: Rgb<u8> = Rgb([0, 0, 0]);

pub const BODY_COLOR: Rgb<u8> = Rgb([120, 140, 160]);
pub const BELLY_COLOR: Rgb<u8> = Rgb([200, 220, 230]);
pub const EAR_COLOR: Rgb<u8> = Rgb([100, 120, 140]);
pub const EYE_COLOR: Rgb<u8> = Rgb([60, 60, 60]);
pub const NOSE_COLOR: Rgb<u8> = Rgb([40, 40, 40]);
pub const GLYPH_COLOR: Rgb<u8> = Rgb([255, 215, 0]);

pub const SPARKLE_COLORS: [Rgb<u8>; 1] = [Rgb([255, 255, 200])];
pub const LEAF_COLORS: [Rgb<u8>; 3] = [
    Rgb([34, 139, 34]),  // forest green
    Rgb([50, 205, 50]),  // lime green
    Rgb([154, 205, 50]), // yellow green
];

pub const SPARKLE_SEED: u64 = 42;
pub const LEAF_SEED: u64 = 123;

/// One entry of the iPhone AppIcon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length in pixels
    pub size: u32,
    pub filename: &'static str,
    /// Edge length in points
    pub points: u32,
    /// Pixels per point
    pub scale: u32,
}

impl IconSpec {
    const fn new(size: u32, filename: &'static str, points: u32, scale: u32) -> Self {
        Self {
            size,
            filename,
            points,
            scale,
        }
    }

    /// Asset catalog idiom for this slot
    pub fn idiom(&self) -> &'static str {
        match self.points {
            1024 => "ios-marketing",
            _ => "iphone",
        }
    }

    /// Asset catalog role for this slot
    pub fn role(&self) -> Option<&'static str> {
        match self.points {
            20 => Some("notificationCenter"),
            29 => Some("companionSettings"),
            40 => Some("spotlight"),
            60 => Some("appLauncher"),
            _ => None,
        }
    }

    fn image_entry(&self) -> ImageEntry {
        ImageEntry::new_app_icon(
            self.filename.to_string(),
            self.idiom().to_string(),
            format!("{0}x{0}", self.points),
            format!("{}x", self.scale),
            self.role().map(str::to_string),
        )
        .with_expected_size(self.size)
    }
}

/// Every image the AppIcon set needs.
pub const ICON_MANIFEST: [IconSpec; 9] = [
    IconSpec::new(40, "AppIcon-20@2x.png", 20, 2),
    IconSpec::new(60, "AppIcon-20@3x.png", 20, 3),
    IconSpec::new(58, "AppIcon-29@2x.png", 29, 2),
    IconSpec::new(87, "AppIcon-29@3x.png", 29, 3),
    IconSpec::new(80, "AppIcon-40@2x.png", 40, 2),
    IconSpec::new(120, "AppIcon-40@3x.png", 40, 3),
    IconSpec::new(120, "AppIcon-60@2x.png", 60, 2),
    IconSpec::new(180, "AppIcon-60@3x.png", 60, 3),
    IconSpec::new(1024, "AppIcon-1024.png", 1024, 1),
];

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    /// Also write an Xcode Contents.json next to the PNGs
    pub contents_json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            contents_json: false,
        }
    }
}

/// Render every icon in [`ICON_MANIFEST`] into `options.output`.
///
/// Stops at the first failure; files written before it are left on disk.
pub fn generate_icons(options: &Options) -> Result<()> {
    create_dir_all(&options.output).context("Can't create output directory")?;

    println!("Generating magical app icons...");

    for spec in &ICON_MANIFEST {
        let icon = compose_icon(spec.size);
        let output_path = options.output.join(spec.filename);
        save_png(&icon, &output_path)
            .with_context(|| format!("Failed to save {}", output_path.display()))?;
        println!("  ✓ Generated {} ({}x{})", spec.filename, spec.size, spec.size);
    }

    if options.contents_json {
        let mut contents = ContentsFile::new("magic-icons".to_string());
        for spec in &ICON_MANIFEST {
            contents.add_image(spec.image_entry());
        }
        write_contents_json(&options.output, &contents)?;
        println!("  ✓ Generated Contents.json");
    }

    Ok(())
}

/// Paint one complete icon of `size` x `size` pixels.
pub fn compose_icon(size: u32) -> RgbImage {
    let mut img = linear_gradient(size, size, GRADIENT_START, GRADIENT_END);
    let scale = size as f64 / REFERENCE_SIZE;

    draw_dots(&mut img, &DotLayer::leaves(LEAF_SEED), scale);
    draw_dots(&mut img, &DotLayer::sparkles(SPARKLE_SEED), scale);

    let silhouette_x = (size as f64 * 0.35) as i32;
    let silhouette_y = (size as f64 * 0.5) as i32;
    draw_silhouette(&mut img, silhouette_x, silhouette_y, scale * 0.8);

    let glyph_x = (size as f64 * 0.7) as i32;
    let glyph_y = (size as f64 * 0.4) as i32;
    draw_glyph(&mut img, glyph_x, glyph_y, scale);

    let corner_radius = (size as f64 * CORNER_RADIUS_RATIO) as u32;
    let mask = rounded_rect_mask(size, corner_radius);
    apply_mask(&img, &mask, MATTE)
}

fn scaled(base: f64, scale: f64) -> i32 {
    (base * scale) as i32
}

/// Draw the round forest-spirit silhouette centered on `(cx, cy)`.
///
/// Later shapes paint over earlier ones: body, belly, ears, eyes, nose.
pub fn draw_silhouette(img: &mut RgbImage, cx: i32, cy: i32, scale: f64) {
    let s = |base: f64| scaled(base, scale);

    let body_w = s(60.0);
    let body_h = s(80.0);
    fill_ellipse(
        img,
        [cx - body_w / 2, cy - body_h / 2, cx + body_w / 2, cy + body_h / 2],
        BODY_COLOR,
    );

    let belly_w = s(40.0);
    let belly_h = s(50.0);
    let belly_drop = s(10.0);
    fill_ellipse(
        img,
        [
            cx - belly_w / 2,
            cy - belly_h / 2 + belly_drop,
            cx + belly_w / 2,
            cy + belly_h / 2 + belly_drop,
        ],
        BELLY_COLOR,
    );

    // Ears
    fill_ellipse(img, [cx - s(40.0), cy - s(60.0), cx - s(20.0), cy - s(40.0)], EAR_COLOR);
    fill_ellipse(img, [cx + s(20.0), cy - s(60.0), cx + s(40.0), cy - s(40.0)], EAR_COLOR);

    // Eyes
    fill_ellipse(img, [cx - s(20.0), cy - s(20.0), cx - s(12.0), cy - s(12.0)], EYE_COLOR);
    fill_ellipse(img, [cx + s(12.0), cy - s(20.0), cx + s(20.0), cy - s(12.0)], EYE_COLOR);

    fill_ellipse(img, [cx - s(3.0), cy - s(5.0), cx + s(3.0), cy + s(1.0)], NOSE_COLOR);
}

/// Draw the three-bar ideogram centered on `(cx, cy)`: one vertical stroke
/// crossed by two horizontal ones.
pub fn draw_glyph(img: &mut RgbImage, cx: i32, cy: i32, scale: f64) {
    let stroke = scaled(4.0, scale).max(2);
    let span = scaled(30.0, scale);
    let half_stroke = stroke / 2;
    let half_span = span / 2;

    fill_rect(
        img,
        [cx - half_stroke, cy - half_span, cx + half_stroke, cy + half_span],
        GLYPH_COLOR,
    );

    let top = cy - span / 3;
    fill_rect(
        img,
        [cx - half_span, top - half_stroke, cx + half_span, top + half_stroke],
        GLYPH_COLOR,
    );

    let bottom = cy + span / 4;
    fill_rect(
        img,
        [cx - half_span, bottom - half_stroke, cx + half_span, bottom + half_stroke],
        GLYPH_COLOR,
    );
}

/// A length that either stays fixed or follows the icon scale.
#[derive(Debug, Clone, Copy)]
pub enum Extent {
    Fixed(i32),
    Scaled(f64),
}

impl Extent {
    fn resolve(self, scale: f64) -> i32 {
        match self {
            Extent::Fixed(px) => px,
            Extent::Scaled(base) => scaled(base, scale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotShape {
    /// Circle of radius `r`
    Round,
    /// Ellipse `2r` wide and `r` tall
    Leaf,
}

/// A seeded layer of randomly scattered decorative dots.
#[derive(Debug, Clone)]
pub struct DotLayer {
    pub seed: u64,
    pub min_count: u32,
    /// Dot count on the reference canvas
    pub base_count: f64,
    /// Distance kept from every edge, on the reference canvas
    pub margin: f64,
    pub min_radius: Extent,
    pub max_radius: Extent,
    pub palette: &'static [Rgb<u8>],
    pub shape: DotShape,
}

impl DotLayer {
    /// Pale round sparkles, kept away from the edges.
    pub fn sparkles(seed: u64) -> Self {
        Self {
            seed,
            min_count: 5,
            base_count: 12.0,
            margin: 10.0,
            min_radius: Extent::Fixed(2),
            max_radius: Extent::Scaled(6.0),
            palette: &SPARKLE_COLORS,
            shape: DotShape::Round,
        }
    }

    /// Flattened green leaves, anywhere on the canvas.
    pub fn leaves(seed: u64) -> Self {
        Self {
            seed,
            min_count: 3,
            base_count: 8.0,
            margin: 0.0,
            min_radius: Extent::Scaled(3.0),
            max_radius: Extent::Scaled(8.0),
            palette: &LEAF_COLORS,
            shape: DotShape::Leaf,
        }
    }

    pub fn count(&self, scale: f64) -> u32 {
        ((self.base_count * scale) as u32).max(self.min_count)
    }
}

/// Scatter one dot layer over the image.
///
/// The layer owns its random sequence, so the result depends only on the
/// layer and the image dimensions.
pub fn draw_dots(img: &mut RgbImage, layer: &DotLayer, scale: f64) {
    if layer.palette.is_empty() {
        return;
    }

    let mut rng = StdRng::seed_from_u64(layer.seed);
    let width = img.width() as i32;
    let height = img.height() as i32;
    let margin = scaled(layer.margin, scale);

    let min_radius = layer.min_radius.resolve(scale);
    // Below a third of the reference scale the upper bound drops under the lower one
    let max_radius = layer.max_radius.resolve(scale).max(min_radius);

    for _ in 0..layer.count(scale) {
        let x = rng.gen_range(margin..=(width - margin).max(margin));
        let y = rng.gen_range(margin..=(height - margin).max(margin));
        let color = layer.palette[rng.gen_range(0..layer.palette.len())];
        let r = rng.gen_range(min_radius..=max_radius);

        let bbox = match layer.shape {
            DotShape::Round => [x - r, y - r, x + r, y + r],
            DotShape::Leaf => [x - r, y - r / 2, x + r, y + r / 2],
        };
        fill_ellipse(img, bbox, color);
    }
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path).context("Failed to create PNG file")?;
    let mut out = BufWriter::new(file);
    write_png(image.as_raw(), &mut out, image.width()).context("Failed to write PNG")?;
    out.flush().context("Failed to flush PNG file")?;
    Ok(())
}

// Encode RGB image data as PNG with a fixed, deterministic configuration
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgb8)?;
    Ok(())
}
