use approx::assert_relative_eq;
use chrono::NaiveDate;
use yield_surface::core::{
    BLUE_PALETTE, ColorScale, LinearScale, TimeScale, TimeTickInterval, nice_ticks,
};
use yield_surface::error::{ScaleAxis, SurfaceError};
use yield_surface::render::Color;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::new((0.0, 2.0), (0.0, 40.0)).expect("valid scale");
    assert_relative_eq!(scale.map(0.5).expect("map"), 10.0);
    assert_relative_eq!(scale.invert(30.0).expect("invert"), 1.5);
    assert_relative_eq!(scale.range_mean(), 20.0);
}

#[test]
fn degenerate_rate_domain_maps_everything_to_range_start() {
    let scale = LinearScale::new((0.0, 0.0), (0.0, 40.0)).expect("zero-width domain is allowed");
    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0).expect("map"), 0.0);
    assert_eq!(scale.map(-1.5).expect("map"), 0.0);
}

#[test]
fn non_finite_input_is_rejected() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("valid scale");
    assert!(scale.map(f64::NAN).is_err());
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
}

#[test]
fn rate_ticks_use_decimal_steps() {
    let ticks = nice_ticks(0.0, 2.0, 20);
    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks[3], 0.3);
    assert_eq!(ticks[20], 2.0);
}

#[test]
fn time_scale_spans_the_width() {
    let scale = TimeScale::new(date(2020, 1, 1), date(2021, 1, 1), (-40.0, 40.0))
        .expect("valid time scale");
    assert_relative_eq!(scale.map(date(2020, 1, 1)).expect("map"), -40.0);
    assert_relative_eq!(scale.map(date(2021, 1, 1)).expect("map"), 40.0);
    let mid = scale.map(date(2020, 7, 2)).expect("map");
    assert_relative_eq!(mid, 0.0, epsilon = 1e-9);
}

#[test]
fn single_date_time_domain_is_degenerate() {
    let err = TimeScale::new(date(2020, 1, 1), date(2020, 1, 1), (-40.0, 40.0))
        .expect_err("single date");
    assert!(matches!(
        err,
        SurfaceError::DegenerateDomain {
            axis: ScaleAxis::Time,
            ..
        }
    ));
    assert!(!err.is_user_correctable());
}

#[test]
fn one_year_of_dates_gets_monthly_ticks() {
    let scale = TimeScale::new(date(2020, 1, 1), date(2021, 1, 1), (-40.0, 40.0))
        .expect("valid time scale");
    assert_eq!(scale.tick_interval(10), TimeTickInterval::Month { step: 1 });
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first(), Some(&date(2020, 1, 1)));
    assert_eq!(ticks.last(), Some(&date(2021, 1, 1)));
}

#[test]
fn quantile_scale_is_monotone_and_tops_out_at_the_last_color() {
    let rates = [1.0, 1.5, 1.2, 2.0, 1.8];
    let scale = ColorScale::quantile(rates, BLUE_PALETTE.to_vec()).expect("valid color scale");

    assert_eq!(scale.color(2.0).expect("color"), scale.top_color().expect("top color"));
    assert_eq!(scale.top_color().expect("top color"), BLUE_PALETTE[21]);
    assert_eq!(scale.color(0.0).expect("color"), BLUE_PALETTE[0]);

    let index = |color: Color| {
        BLUE_PALETTE
            .iter()
            .position(|candidate| *candidate == color)
            .expect("palette color")
    };
    let mut previous = 0;
    for step in 0..=40 {
        let rate = 0.9 + f64::from(step) * 0.03;
        let current = index(scale.color(rate).expect("color"));
        assert!(current >= previous, "palette index fell at rate {rate}");
        previous = current;
    }
}

#[test]
fn linear_scale_blends_between_gradient_ends() {
    let low = Color::from_rgb_u32(0xeef4f8);
    let high = Color::from_rgb_u32(0x243d52);
    let scale = ColorScale::linear([1.0, 3.0], low, high).expect("valid color scale");

    assert_eq!(scale.color(1.0).expect("color"), low);
    assert_eq!(scale.color(3.0).expect("color"), high);
    assert_eq!(scale.color(10.0).expect("clamped"), high);
    let mid = scale.color(2.0).expect("color");
    assert_relative_eq!(mid.red, (low.red + high.red) / 2.0, epsilon = 1e-12);
}

#[test]
fn zero_width_linear_domain_uses_the_high_color() {
    let high = Color::from_rgb_u32(0x243d52);
    let scale = ColorScale::linear([1.5, 1.5], Color::WHITE, high).expect("valid color scale");
    assert_eq!(scale.color(1.5).expect("color"), high);
}

#[test]
fn coloring_a_missing_rate_is_an_error() {
    let scale = ColorScale::quantile([1.0, 2.0], BLUE_PALETTE.to_vec()).expect("valid scale");
    assert!(matches!(
        scale.color_of(None),
        Err(SurfaceError::MissingValuePropagation { .. })
    ));
    assert_eq!(scale.color_of(Some(2.0)).expect("color"), scale.top_color().expect("top color"));
}

#[test]
fn color_scale_needs_at_least_one_rate() {
    let err = ColorScale::quantile(std::iter::empty(), BLUE_PALETTE.to_vec())
        .expect_err("no rates");
    assert!(matches!(
        err,
        SurfaceError::DegenerateDomain {
            axis: ScaleAxis::Color,
            ..
        }
    ));
}
