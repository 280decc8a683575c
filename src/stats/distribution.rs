// src/stats/distribution.rs

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over [min, max]; the last bin is closed on the right.
/// Non-finite values are ignored. All-equal input gives one bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if vals.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        return vec![Bin { lo, hi, count: vals.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lo: lo + width * i as f64,
            hi: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in vals {
        let i = (((v - lo) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub n: usize,
}

impl BoxStats {
    /// Five-number summary with linearly interpolated quartiles.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_by(f64::total_cmp);
        Some(Self {
            min: v[0],
            q1: quantile(&v, 0.25),
            median: quantile(&v, 0.5),
            q3: quantile(&v, 0.75),
            max: v[v.len() - 1],
            n: v.len(),
        })
    }
}

/// `q`-quantile of sorted data, linear interpolation between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let i = pos.floor() as usize;
    let frac = pos - i as f64;
    match sorted.get(i + 1) {
        Some(next) => sorted[i] + (next - sorted[i]) * frac,
        None => sorted[i],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_closes_last_bin() {
        let h = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(h.len(), 4);
        assert_eq!(h.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
        assert_eq!(h[3].hi, 4.0);
    }

    #[test]
    fn histogram_degenerate_inputs() {
        assert!(histogram(&[], 10).is_empty());
        assert_eq!(histogram(&[5.0, 5.0, f64::NAN], 10), vec![Bin { lo: 5.0, hi: 5.0, count: 2 }]);
    }

    #[test]
    fn box_stats_interpolate() {
        let b = BoxStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!((b.min, b.max, b.n), (1.0, 4.0, 4));
        assert_eq!(b.median, 2.5);
        assert_eq!(b.q1, 1.75);
        assert_eq!(b.q3, 3.25);
        assert!(BoxStats::from_values(&[]).is_none());
    }
}
