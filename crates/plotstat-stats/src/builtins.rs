//! Built-in statistics: extrema, their coordinates, mean, std, delta, COM.
//!
//! All built-ins skip non-finite samples, so a stray NaN in the data cannot
//! poison an extremum or an average. A context without any finite sample
//! yields [`StatsError::EmptyDataset`], which the table records as an
//! undefined cell.

use plotstat_core::{ItemKind, StatContext};

use crate::stat::{Stat, StatValue, StatsError, StatsResult};

/// Index of the smallest finite value, first occurrence on ties
fn argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if b <= v => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the largest finite value, first occurrence on ties
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if b >= v => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

fn finite_mean(values: &[f64]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

/// Population standard deviation over the finite samples
fn finite_std(values: &[f64]) -> Option<f64> {
    let mean = finite_mean(values)?;
    let mut sum_sq = 0.0;
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum_sq += (v - mean) * (v - mean);
            count += 1;
        }
    }
    Some((sum_sq / count as f64).sqrt())
}

/// Minimum of the flattened values
#[derive(Debug, Default, Clone, Copy)]
pub struct StatMin;

impl Stat for StatMin {
    fn name(&self) -> &str {
        "min"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let i = argmin(context.values()).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Scalar(context.values()[i]))
    }
}

/// Maximum of the flattened values
#[derive(Debug, Default, Clone, Copy)]
pub struct StatMax;

impl Stat for StatMax {
    fn name(&self) -> &str {
        "max"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let i = argmax(context.values()).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Scalar(context.values()[i]))
    }
}

/// Coordinate of the minimum, in the item's native axes
#[derive(Debug, Default, Clone, Copy)]
pub struct StatCoordMin;

impl Stat for StatCoordMin {
    fn name(&self) -> &str {
        "coords min"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let i = argmin(context.values()).ok_or(StatsError::EmptyDataset)?;
        let coords = context.coords_of(i).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Coords(coords))
    }
}

/// Coordinate of the maximum, in the item's native axes
#[derive(Debug, Default, Clone, Copy)]
pub struct StatCoordMax;

impl Stat for StatCoordMax {
    fn name(&self) -> &str {
        "coords max"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let i = argmax(context.values()).ok_or(StatsError::EmptyDataset)?;
        let coords = context.coords_of(i).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Coords(coords))
    }
}

/// Peak-to-peak range, `max - min`
#[derive(Debug, Default, Clone, Copy)]
pub struct StatDelta;

impl Stat for StatDelta {
    fn name(&self) -> &str {
        "delta"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let values = context.values();
        let lo = argmin(values).ok_or(StatsError::EmptyDataset)?;
        let hi = argmax(values).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Scalar(values[hi] - values[lo]))
    }
}

/// Arithmetic mean of the flattened values
#[derive(Debug, Default, Clone, Copy)]
pub struct StatMean;

impl Stat for StatMean {
    fn name(&self) -> &str {
        "mean"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let mean = finite_mean(context.values()).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Scalar(mean))
    }
}

/// Population standard deviation of the flattened values.
///
/// A single sample has a standard deviation of 0, not an undefined value.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatStd;

impl Stat for StatStd {
    fn name(&self) -> &str {
        "std"
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let std = finite_std(context.values()).ok_or(StatsError::EmptyDataset)?;
        Ok(StatValue::Scalar(std))
    }
}

/// Center of mass.
///
/// For a curve this is the scalar `sum(x * y) / sum(y)`. For a scatter it is
/// the per-axis centroid weighted by the point values. Images are not
/// supported: mass weighting needs paired coordinate/value semantics, which a
/// raster index does not carry.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatCom;

impl StatCom {
    const KINDS: [ItemKind; 2] = [ItemKind::Curve, ItemKind::Scatter];
}

impl Stat for StatCom {
    fn name(&self) -> &str {
        "com"
    }

    fn compatible_kinds(&self) -> &[ItemKind] {
        &Self::KINDS
    }

    fn compute(&self, context: &StatContext) -> StatsResult<StatValue> {
        let unsupported = || StatsError::KindNotSupported {
            stat: "com".to_string(),
            kind: context.kind(),
        };
        if context.kind() == ItemKind::Image {
            return Err(unsupported());
        }
        if context.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        let x = context.axis_x().ok_or_else(unsupported)?;
        let weights = context.values();
        let den: f64 = weights.iter().sum();

        match context.kind() {
            ItemKind::Curve => {
                let num: f64 = x.iter().zip(weights).map(|(xi, yi)| xi * yi).sum();
                Ok(StatValue::Scalar(num / den))
            }
            ItemKind::Scatter => {
                let y = context.axis_y().ok_or_else(unsupported)?;
                let cx = x.iter().zip(weights).map(|(xi, wi)| xi * wi).sum::<f64>() / den;
                let cy = y.iter().zip(weights).map(|(yi, wi)| yi * wi).sum::<f64>() / den;
                Ok(StatValue::Coords(plotstat_core::Coords::Scatter {
                    x: cx,
                    y: cy,
                }))
            }
            ItemKind::Image => Err(unsupported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use plotstat_core::{Coords, ItemData, PlotItem};

    fn context(data: ItemData) -> StatContext {
        StatContext::resolve(&PlotItem::new("item", data))
    }

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_curve_scenario() {
        // curve x = y = 0..20
        let ctx = context(ItemData::curve(ramp(20), ramp(20)).unwrap());

        assert_eq!(StatMin.compute(&ctx).unwrap(), StatValue::Scalar(0.0));
        assert_eq!(StatMax.compute(&ctx).unwrap(), StatValue::Scalar(19.0));
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(0.0))
        );
        assert_eq!(
            StatCoordMax.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(19.0))
        );
        assert_eq!(StatDelta.compute(&ctx).unwrap(), StatValue::Scalar(19.0));

        let mean = StatMean.compute(&ctx).unwrap().as_scalar().unwrap();
        assert!((mean - 9.5).abs() < 1e-10);

        // population std of 0..19
        let expected_std = (ramp(20).iter().map(|v| (v - 9.5) * (v - 9.5)).sum::<f64>() / 20.0).sqrt();
        let std = StatStd.compute(&ctx).unwrap().as_scalar().unwrap();
        assert!((std - expected_std).abs() < 1e-10);

        // com = sum(i * i) / sum(i)
        let expected_com = ramp(20).iter().map(|v| v * v).sum::<f64>()
            / ramp(20).iter().sum::<f64>();
        let com = StatCom.compute(&ctx).unwrap().as_scalar().unwrap();
        assert!((com - expected_com).abs() < 1e-10);
    }

    #[test]
    fn test_image_scenario() {
        // 128x128 raster holding 0..128*128-1 row-major
        let raster = Array2::from_shape_vec((128, 128), ramp(128 * 128)).unwrap();
        let ctx = context(ItemData::image(raster));

        assert_eq!(StatMin.compute(&ctx).unwrap(), StatValue::Scalar(0.0));
        assert_eq!(StatMax.compute(&ctx).unwrap(), StatValue::Scalar(16383.0));
        assert_eq!(StatDelta.compute(&ctx).unwrap(), StatValue::Scalar(16383.0));
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Image { row: 0, col: 0 })
        );
        assert_eq!(
            StatCoordMax.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Image { row: 127, col: 127 })
        );
    }

    #[test]
    fn test_scatter_scenario() {
        let ctx = context(
            ItemData::scatter(
                vec![0.0, 1.0, 2.0, 20.0, 50.0, 60.0],
                vec![2.0, 3.0, 4.0, 26.0, 69.0, 6.0],
                vec![5.0, 6.0, 7.0, 10.0, 90.0, 20.0],
            )
            .unwrap(),
        );

        assert_eq!(StatMin.compute(&ctx).unwrap(), StatValue::Scalar(5.0));
        assert_eq!(StatMax.compute(&ctx).unwrap(), StatValue::Scalar(90.0));
        assert_eq!(StatDelta.compute(&ctx).unwrap(), StatValue::Scalar(85.0));
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Scatter { x: 0.0, y: 2.0 })
        );
        assert_eq!(
            StatCoordMax.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Scatter { x: 50.0, y: 69.0 })
        );
    }

    #[test]
    fn test_scatter_com_is_weighted_centroid() {
        let x = vec![0.0, 10.0];
        let y = vec![0.0, 20.0];
        let w = vec![1.0, 3.0];
        let ctx = context(ItemData::scatter(x, y, w).unwrap());

        let coords = StatCom.compute(&ctx).unwrap().as_coords().unwrap();
        match coords {
            Coords::Scatter { x, y } => {
                assert!((x - 7.5).abs() < 1e-10);
                assert!((y - 15.0).abs() < 1e-10);
            }
            other => panic!("unexpected coords {:?}", other),
        }
    }

    #[test]
    fn test_single_sample() {
        let ctx = context(ItemData::curve(vec![4.0], vec![2.5]).unwrap());

        assert_eq!(StatStd.compute(&ctx).unwrap(), StatValue::Scalar(0.0));
        assert_eq!(StatDelta.compute(&ctx).unwrap(), StatValue::Scalar(0.0));
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(4.0))
        );
        assert_eq!(
            StatCoordMax.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(4.0))
        );
    }

    #[test]
    fn test_empty_dataset_errors() {
        let ctx = context(ItemData::curve(Vec::new(), Vec::new()).unwrap());

        assert!(matches!(
            StatMin.compute(&ctx),
            Err(StatsError::EmptyDataset)
        ));
        assert!(matches!(
            StatMean.compute(&ctx),
            Err(StatsError::EmptyDataset)
        ));
        assert!(matches!(
            StatCom.compute(&ctx),
            Err(StatsError::EmptyDataset)
        ));
    }

    #[test]
    fn test_nan_samples_are_skipped() {
        let ctx = context(
            ItemData::curve(vec![0.0, 1.0, 2.0], vec![3.0, f64::NAN, 1.0]).unwrap(),
        );

        assert_eq!(StatMin.compute(&ctx).unwrap(), StatValue::Scalar(1.0));
        assert_eq!(StatMax.compute(&ctx).unwrap(), StatValue::Scalar(3.0));
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(2.0))
        );
        let mean = StatMean.compute(&ctx).unwrap().as_scalar().unwrap();
        assert!((mean - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_ties_resolve_to_first_index() {
        let ctx = context(ItemData::curve(ramp(3), vec![7.0, 7.0, 7.0]).unwrap());
        assert_eq!(
            StatCoordMin.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(0.0))
        );
        assert_eq!(
            StatCoordMax.compute(&ctx).unwrap(),
            StatValue::Coords(Coords::Curve(0.0))
        );
    }

    #[test]
    fn test_com_rejects_images() {
        let ctx = context(ItemData::image(Array2::zeros((2, 2))));
        assert!(!StatCom.is_compatible(ItemKind::Image));
        assert!(matches!(
            StatCom.compute(&ctx),
            Err(StatsError::KindNotSupported { .. })
        ));
    }
}
