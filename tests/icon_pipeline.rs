use magic_icons::draw::linear_gradient;
use magic_icons::icon_gen::{
    compose_icon, generate_icons, Options, GRADIENT_END, GRADIENT_START, ICON_MANIFEST, MATTE,
};
use tempfile::TempDir;

#[test]
fn test_background_gradient_runs_from_forest_to_sky() {
    let size = 180;
    let background = linear_gradient(size, size, GRADIENT_START, GRADIENT_END);

    assert_eq!(*background.get_pixel(0, 0), GRADIENT_START);

    let last = background.get_pixel(size - 1, size - 1);
    for channel in 0..3 {
        let gap = GRADIENT_END[channel] as i32 - last[channel] as i32;
        assert!((0..=2).contains(&gap), "channel {channel} gap {gap}");
    }

    for y in 1..size {
        let above = background.get_pixel(0, y - 1);
        let here = background.get_pixel(0, y);
        for channel in 0..3 {
            assert!(here[channel] >= above[channel]);
        }
    }
}

#[test]
fn test_every_manifest_size_has_matte_corners() {
    for spec in &ICON_MANIFEST {
        let icon = compose_icon(spec.size);
        let last = spec.size - 1;

        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(
                *icon.get_pixel(x, y),
                MATTE,
                "{} corner ({x}, {y})",
                spec.filename
            );
        }

        // The middle of the icon is painted content, not matte
        assert_ne!(*icon.get_pixel(spec.size / 2, spec.size / 2), MATTE);
    }
}

#[test]
fn test_generate_icons_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let options = Options {
        output: temp_dir.path().join("a/b/AppIcon.appiconset"),
        contents_json: false,
    };

    generate_icons(&options).unwrap();

    for spec in &ICON_MANIFEST {
        let decoded = image::open(options.output.join(spec.filename))
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded, compose_icon(spec.size), "{}", spec.filename);
    }
    assert!(!options.output.join("Contents.json").exists());
}
