use super::*;

#[test]
fn rgba_formats_as_css() {
    assert_eq!(
        Rgba::new(120, 170, 255, 0.18).to_css(),
        "rgba(120,170,255,0.18)"
    );
    assert_eq!(Rgba::new(0, 0, 0, 0.9).to_css(), "rgba(0,0,0,0.9)");
}

#[test]
fn lengths_carry_their_unit() {
    assert_eq!(CssLength::vw(-22.0).to_css(), "-22vw");
    assert_eq!(CssLength::px(12.5).to_css(), "12.5px");
    assert_eq!(CssLength::percent(40.0).to_css(), "40%");
    assert_eq!(CssLength::rem(1.2).to_css(), "1.2rem");
}

#[test]
fn blur_filter_never_goes_negative() {
    assert_eq!(blur_filter(6.0), "blur(6px)");
    assert_eq!(blur_filter(-1.0), "blur(0px)");
}
