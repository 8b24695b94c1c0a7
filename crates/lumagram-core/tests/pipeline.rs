//! End-to-end checks: decoded buffer -> histograms -> paths -> draw list.

use lumagram_core::scopes::geometry::PATH_POINTS;
use lumagram_core::{
    Channel, HistogramScope, HistogramSet, Paint, PixelSample, RenderStyleConfig, SourceImage,
    Viewport, build_paths, compute,
};

/// 2×2 image: red, green, blue, white.
fn primaries_image() -> SourceImage {
    let bytes = [
        255, 0, 0, 255, //
        0, 255, 0, 255, //
        0, 0, 255, 255, //
        255, 255, 255, 255,
    ];
    SourceImage::from_rgba8(2, 2, &bytes).expect("2x2 RGBA buffer")
}

fn nonzero(bins: &[u64]) -> Vec<(usize, u64)> {
    bins.iter()
        .enumerate()
        .filter(|(_, v)| **v > 0)
        .map(|(i, v)| (i, *v))
        .collect()
}

#[test]
fn test_primaries_histograms() {
    let set = compute(&primaries_image());

    assert_eq!(set.pixel_count(), 4);
    assert_eq!(nonzero(set.red()), vec![(0, 2), (255, 2)]);
    assert_eq!(nonzero(set.green()), vec![(0, 2), (255, 2)]);
    assert_eq!(nonzero(set.blue()), vec![(0, 2), (255, 2)]);
    assert_eq!(
        nonzero(set.luma()),
        vec![(29, 1), (76, 1), (150, 1), (255, 1)]
    );
    for ch in Channel::ALL {
        assert_eq!(set.channel(ch).len(), 256);
        assert_eq!(set.channel(ch).iter().sum::<u64>(), 4);
    }
}

#[test]
fn test_primaries_paths_share_scale() {
    let set = compute(&primaries_image());
    let paths = build_paths(&set, Viewport::new(256.0, 100.0).unwrap());
    assert_eq!(set.peak(), 2);

    let red = &paths.get(Channel::Red).unwrap().points;
    assert_eq!(red.len(), PATH_POINTS);
    assert_eq!(red[1].y, 0.0);
    assert_eq!(red[256].y, 0.0);
    assert_eq!(red[2].y, 100.0);

    // Single-pixel luma buckets reach half height under the shared peak.
    let luma = &paths.get(Channel::Luma).unwrap().points;
    assert!((luma[1 + 76].y - 50.0).abs() < 1e-4);
}

#[test]
fn test_solid_image_from_image_crate() {
    let buffer = image::RgbImage::from_pixel(8, 4, image::Rgb([17, 99, 230]));
    let set = compute(&SourceImage::from(&buffer));
    assert_eq!(set.red()[17], 32);
    assert_eq!(set.green()[99], 32);
    assert_eq!(set.blue()[230], 32);
    assert_eq!(nonzero(set.red()).len(), 1);
    assert_eq!(nonzero(set.green()).len(), 1);
    assert_eq!(nonzero(set.blue()).len(), 1);
}

#[test]
fn test_empty_image_draws_flat_baseline() {
    let image = SourceImage::new(0, 0, Vec::<PixelSample>::new()).unwrap();
    let set = compute(&image);
    assert_eq!(set, HistogramSet::empty());

    let paths = build_paths(&set, Viewport::new(40.0, 10.0).unwrap());
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().all(|p| p.points.iter().all(|pt| pt.y == 10.0)));
}

#[test]
fn test_scope_flow() {
    let style = RenderStyleConfig::from_json(r#"{ "fill": true, "show_blue": false }"#).unwrap();
    let mut scope = HistogramScope::new(Viewport::new(320.0, 120.0).unwrap(), style);
    scope.set_image(&primaries_image());

    let list = scope.draw_list();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|c| c.paint == Paint::Fill && c.closed));
    assert!(list.iter().all(|c| c.channel != Channel::Blue));

    scope.resize(Viewport::new(160.0, 60.0).unwrap());
    let last = scope.paths().get(Channel::Red).unwrap().points[PATH_POINTS - 1];
    assert_eq!((last.x, last.y), (160.0, 60.0));
    assert_eq!(scope.histograms().map(|s| s.pixel_count()), Some(4));
}
