//! The bar chart component: configuration, scales, and the update
//! lifecycle binding filtered records to animated bar geometry.
//!
//! The chart owns no UI surface. [`Chart::update`] recomputes scale
//! domains and retargets per-bar transitions; [`Chart::bar_frames`],
//! [`Chart::x_ticks`] and [`Chart::y_ticks`] expose the resulting
//! geometry for whatever painter draws it. That seam keeps every piece
//! of scale and transition logic testable without a window.

pub mod scale;
pub mod transition;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use eframe::egui::Color32;

use crate::color;
use crate::data::model::Record;
use crate::error::ConfigError;
use scale::{BandScale, LinearScale};
use transition::Transition;

// ---------------------------------------------------------------------------
// Transition timings
// ---------------------------------------------------------------------------

/// New bars grow in from the baseline over half a second.
const GROW_DURATION: f32 = 0.5;
/// Per-bar delay producing the cascading reveal.
const GROW_STAGGER: f32 = 0.005;
/// Every update fades all bars from half to full opacity.
const FADE_DURATION: f32 = 1.0;
const FADE_FROM: f32 = 0.5;
/// Band-axis ticks glide to their new positions.
const AXIS_DURATION: f32 = 1.0;

/// Fraction of each band step left empty between bars.
const BAND_PADDING: f32 = 0.2;
/// Requested tick count on the percent axis.
const Y_TICK_COUNT: usize = 30;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Margins around the inner drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 70.0,
            right: 50.0,
            bottom: 100.0,
            left: 50.0,
        }
    }
}

/// Chart geometry and behavior. Everything except `reverse_order` is
/// fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    /// Flip the drawing order of the bound records. Flipping twice
    /// restores the original order.
    pub reverse_order: bool,
    /// Offset of the tooltip overlay from the pointer, in pixels.
    pub tooltip_padding: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 1200.0,
            height: 700.0,
            margin: Margin::default(),
            reverse_order: false,
            tooltip_padding: 15.0,
        }
    }
}

impl ChartConfig {
    /// Validate container geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveSize {
                width: self.width,
                height: self.height,
            });
        }
        let m = &self.margin;
        if m.top < 0.0 || m.right < 0.0 || m.bottom < 0.0 || m.left < 0.0 {
            return Err(ConfigError::NegativeMargin);
        }
        if m.left + m.right >= self.width || m.top + m.bottom >= self.height {
            return Err(ConfigError::MarginsExceedContainer {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Inner drawing width (container minus horizontal margins).
    pub fn inner_width(&self) -> f32 {
        self.width - self.margin.left - self.margin.right
    }

    /// Inner drawing height (container minus vertical margins).
    pub fn inner_height(&self) -> f32 {
        self.height - self.margin.top - self.margin.bottom
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Per-state animated bar. Keyed by state name so a state keeps its
/// identity (and in-flight transitions) across updates.
#[derive(Debug, Clone)]
struct Bar {
    record: Record,
    height: Transition,
    opacity: Transition,
}

/// A bar ready for painting, in inner-drawing-area coordinates.
#[derive(Debug, Clone)]
pub struct BarFrame<'a> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color32,
    pub opacity: f32,
    pub record: &'a Record,
}

/// A band-axis tick: label plus its (possibly gliding) x position.
#[derive(Debug, Clone)]
pub struct XTick<'a> {
    pub label: &'a str,
    pub x: f32,
}

/// A percent-axis tick: value plus its y distance from the top.
#[derive(Debug, Clone)]
pub struct YTick {
    pub value: f64,
    pub y: f32,
}

#[derive(Debug)]
pub struct Chart {
    pub config: ChartConfig,
    band: BandScale,
    linear: LinearScale,
    bars: BTreeMap<String, Bar>,
    tick_x: BTreeMap<String, Transition>,
}

impl Chart {
    /// Construct a chart with validated geometry and bind the initial
    /// dataset.
    pub fn new(config: ChartConfig, initial: &[Record]) -> Result<Self, ConfigError> {
        config.validate()?;
        let band = BandScale::new(config.inner_width(), BAND_PADDING);
        let linear = LinearScale::new(config.inner_height());
        let mut chart = Chart {
            config,
            band,
            linear,
            bars: BTreeMap::new(),
            tick_x: BTreeMap::new(),
        };
        chart.update(initial, 0.0);
        Ok(chart)
    }

    /// Rebind a freshly filtered dataset: recompute both scale domains
    /// and retarget per-bar transitions.
    ///
    /// The input is consumed back-to-front when `config.reverse_order`
    /// is set; the caller's slice is never reordered. An empty input is
    /// the valid "no data" state: degenerate `[0, 0]` percent domain
    /// and no frames.
    pub fn update(&mut self, data: &[Record], now: f64) {
        let ordered: Vec<&Record> = if self.config.reverse_order {
            data.iter().rev().collect()
        } else {
            data.iter().collect()
        };

        // Scales are pure functions of the bound data, rebuilt on every
        // update.
        self.band
            .set_domain(ordered.iter().map(|r| r.state.clone()).collect());
        let max_percent = ordered.iter().map(|r| r.percent).fold(0.0_f64, f64::max);
        self.linear.set_domain_max(max_percent);

        // Drop bars for states no longer bound.
        self.bars
            .retain(|state, _| ordered.iter().any(|r| &r.state == state));
        self.tick_x
            .retain(|state, _| ordered.iter().any(|r| &r.state == state));

        for (i, record) in ordered.iter().enumerate() {
            let target_height = self.linear.extent(record.percent);
            let fade = Transition::animate(FADE_FROM, 1.0, now, FADE_DURATION, 0.0);

            match self.bars.entry(record.state.clone()) {
                Entry::Occupied(mut entry) => {
                    // Existing bar: geometry snaps, only opacity
                    // re-animates.
                    let bar = entry.get_mut();
                    bar.record = (*record).clone();
                    bar.height.snap(target_height);
                    bar.opacity = fade;
                }
                Entry::Vacant(entry) => {
                    // New bar: grow in from the baseline, staggered by
                    // position in the dataset.
                    entry.insert(Bar {
                        record: (*record).clone(),
                        height: Transition::animate(
                            0.0,
                            target_height,
                            now,
                            GROW_DURATION,
                            GROW_STAGGER * i as f32,
                        ),
                        opacity: fade,
                    });
                }
            }

            // Band-axis ticks glide to their new band centers; the
            // percent axis redraws immediately via y_ticks.
            if let Some(x) = self.band.position(&record.state) {
                let center = x + self.band.bandwidth() / 2.0;
                self.tick_x
                    .entry(record.state.clone())
                    .and_modify(|t| t.retarget(center, now, AXIS_DURATION))
                    .or_insert_with(|| Transition::fixed(center));
            }
        }
    }

    /// Geometry for every bound bar at time `now`, in dataset order.
    pub fn bar_frames(&self, now: f64) -> Vec<BarFrame<'_>> {
        self.band
            .domain()
            .iter()
            .filter_map(|state| {
                let bar = self.bars.get(state)?;
                let x = self.band.position(state)?;
                let height = bar.height.value(now);
                Some(BarFrame {
                    x,
                    y: self.config.inner_height() - height,
                    width: self.band.bandwidth(),
                    height,
                    color: color::bucket_color(bar.record.percent),
                    opacity: bar.opacity.value(now),
                    record: &bar.record,
                })
            })
            .collect()
    }

    /// Band-axis ticks at time `now`, in dataset order.
    pub fn x_ticks(&self, now: f64) -> Vec<XTick<'_>> {
        self.band
            .domain()
            .iter()
            .filter_map(|state| {
                self.tick_x.get(state).map(|t| XTick {
                    label: state.as_str(),
                    x: t.value(now),
                })
            })
            .collect()
    }

    /// Percent-axis ticks. Not animated.
    pub fn y_ticks(&self) -> Vec<YTick> {
        self.linear
            .ticks(Y_TICK_COUNT)
            .into_iter()
            .map(|value| YTick {
                value,
                y: self.linear.map(value),
            })
            .collect()
    }

    /// Ordered list of bound state names.
    pub fn states(&self) -> &[String] {
        self.band.domain()
    }

    /// Number of bound bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when no records are bound (the "no data" render state).
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Upper end of the percent domain.
    pub fn max_percent(&self) -> f64 {
        self.linear.domain_max()
    }

    /// Whether any bar or axis transition is still running at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        self.bars
            .values()
            .any(|b| b.height.active(now) || b.opacity.active(now))
            || self.tick_x.values().any(|t| t.active(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Beverage, Sex};

    fn rec(state: &str, percent: f64) -> Record {
        Record {
            state: state.to_string(),
            sex: Sex::Female,
            beverage: Beverage::Any,
            percent,
        }
    }

    fn chart_with(data: &[Record]) -> Chart {
        Chart::new(ChartConfig::default(), data).expect("valid default config")
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn one_bar_per_distinct_state() {
        let chart = chart_with(&[rec("California", 25.4), rec("Texas", 18.0)]);
        let frames = chart.bar_frames(100.0);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].record.state, "California");
        assert_eq!(frames[1].record.state, "Texas");
    }

    #[test]
    fn scales_follow_the_bound_data() {
        let chart = chart_with(&[rec("California", 25.4), rec("Texas", 18.0)]);
        assert_eq!(chart.states(), ["California", "Texas"]);
        assert_eq!(chart.max_percent(), 25.4);

        // Past all transitions the max bar fills the drawing area and
        // heights stay monotone with percent.
        let frames = chart.bar_frames(100.0);
        assert!(approx(frames[0].height, chart.config.inner_height()));
        assert!(frames[1].height < frames[0].height);
        assert!(approx(
            frames[1].height,
            chart.config.inner_height() * (18.0 / 25.4) as f32
        ));
        // y + height lands every bar on the baseline.
        for f in &frames {
            assert!(approx(f.y + f.height, chart.config.inner_height()));
        }
    }

    #[test]
    fn bar_colors_come_from_the_bucket_table() {
        let chart = chart_with(&[rec("California", 25.4), rec("Texas", 18.0)]);
        let frames = chart.bar_frames(100.0);
        assert_eq!(frames[0].color, crate::color::bucket_color(25.4));
        assert_eq!(frames[1].color, crate::color::bucket_color(18.0));
        assert_ne!(frames[0].color, frames[1].color);
    }

    #[test]
    fn reverse_toggled_twice_restores_order() {
        let data = [rec("California", 25.4), rec("Texas", 18.0)];
        let mut chart = chart_with(&data);

        chart.config.reverse_order = true;
        chart.update(&data, 1.0);
        assert_eq!(chart.states(), ["Texas", "California"]);

        chart.config.reverse_order = false;
        chart.update(&data, 2.0);
        assert_eq!(chart.states(), ["California", "Texas"]);
    }

    #[test]
    fn new_state_grows_in_existing_state_snaps() {
        let mut chart = chart_with(&[rec("California", 25.4)]);

        // Update well past the construction-time transitions.
        chart.update(&[rec("California", 25.4), rec("Texas", 18.0)], 100.0);
        let frames = chart.bar_frames(100.0);

        // The pre-existing bar sits at its final height immediately.
        assert!(approx(frames[0].height, chart.config.inner_height()));
        // The new bar starts at the baseline and grows.
        assert!(approx(frames[1].height, 0.0));
        let later = chart.bar_frames(100.3);
        assert!(later[1].height > 0.0);
        let done = chart.bar_frames(102.0);
        assert!(approx(
            done[1].height,
            chart.config.inner_height() * (18.0 / 25.4) as f32
        ));
    }

    #[test]
    fn every_update_replays_the_opacity_fade() {
        let mut chart = chart_with(&[rec("California", 25.4)]);
        chart.update(&[rec("California", 25.4)], 50.0);

        let frames = chart.bar_frames(50.0);
        assert!(approx(frames[0].opacity, 0.5));
        let done = chart.bar_frames(52.0);
        assert!(approx(done[0].opacity, 1.0));
    }

    #[test]
    fn stale_bars_are_removed() {
        let mut chart = chart_with(&[rec("California", 25.4), rec("Texas", 18.0)]);
        chart.update(&[rec("California", 25.4)], 10.0);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.bar_frames(10.0).len(), 1);
    }

    #[test]
    fn empty_dataset_is_a_valid_no_data_state() {
        let mut chart = chart_with(&[rec("California", 25.4)]);
        chart.update(&[], 10.0);
        assert!(chart.is_empty());
        assert!(chart.bar_frames(10.0).is_empty());
        assert_eq!(chart.max_percent(), 0.0);
        assert_eq!(chart.y_ticks().len(), 1);
    }

    #[test]
    fn animation_flag_clears_once_transitions_finish() {
        let mut chart = chart_with(&[rec("California", 25.4)]);
        chart.update(&[rec("California", 25.4), rec("Texas", 18.0)], 10.0);
        assert!(chart.is_animating(10.1));
        assert!(!chart.is_animating(20.0));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let config = ChartConfig {
            width: 80.0,
            height: 80.0,
            ..ChartConfig::default()
        };
        let err = Chart::new(config, &[]).unwrap_err();
        assert!(matches!(err, ConfigError::MarginsExceedContainer { .. }));

        let config = ChartConfig {
            width: 0.0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            Chart::new(config, &[]),
            Err(ConfigError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn band_ticks_glide_between_updates() {
        let data = [rec("California", 25.4), rec("Texas", 18.0)];
        let mut chart = chart_with(&data);

        let settled = chart.x_ticks(50.0);
        let ca_before = settled[0].x;

        chart.config.reverse_order = true;
        chart.update(&data, 50.0);

        // At the moment of the update the tick has not moved yet…
        let ticks = chart.x_ticks(50.0);
        let ca_now = ticks.iter().find(|t| t.label == "California").unwrap().x;
        assert!(approx(ca_now, ca_before));

        // …and one axis-transition later it rests in its new band.
        let ticks = chart.x_ticks(52.0);
        let ca_after = ticks.iter().find(|t| t.label == "California").unwrap().x;
        assert!(!approx(ca_after, ca_before));
    }
}
