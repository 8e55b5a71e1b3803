use tearsheet_charts::cubehelix_palette;
use tearsheet_charts::style::{DEFAULT_COLORS, default_color};

#[test]
fn single_color_is_first_stop() {
    assert_eq!(cubehelix_palette(1, false), vec!["#1a1530"]);
    assert_eq!(cubehelix_palette(1, true), vec!["#1a1530"]);
}

#[test]
fn reverse_flips_the_sampled_sequence() {
    for n in 1..=40 {
        let mut forward = cubehelix_palette(n, false);
        forward.reverse();
        assert_eq!(cubehelix_palette(n, true), forward, "count {n}");
    }
}

#[test]
fn sampling_spans_the_whole_ramp() {
    let p = cubehelix_palette(16, false);
    assert_eq!(p.len(), 16);
    assert_eq!(p.first(), Some(&"#1a1530"));
    assert_eq!(p.last(), Some(&"#f0ef77"));
    let mut distinct = p.clone();
    distinct.dedup();
    assert_eq!(distinct.len(), 16);

    // floor(i * 15 / 3) for i in 0..4 -> 0, 5, 10, 15
    assert_eq!(
        cubehelix_palette(4, false),
        vec!["#1a1530", "#2863a7", "#35bfb4", "#f0ef77"]
    );
}

#[test]
fn default_colors_wrap_around() {
    assert_eq!(DEFAULT_COLORS.len(), 10);
    assert_eq!(default_color(0), "#2f7ed8");
    assert_eq!(default_color(10), default_color(0));
    assert_eq!(default_color(23), DEFAULT_COLORS[3]);
}
