use serde::Serialize;

/// Bracketing breakpoints for one query value.
///
/// `fraction` is the position of the query between `low` and `high`; it is
/// zero whenever the query sits on a breakpoint or was clamped to an edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bracket {
    pub low: usize,
    pub high: usize,
    pub fraction: f64,
}

impl Bracket {
    pub fn exact(index: usize) -> Self {
        Bracket {
            low: index,
            high: index,
            fraction: 0.0,
        }
    }

    /// Linear blend of the values stored at `low` and `high`.
    pub fn lerp(&self, low_value: f64, high_value: f64) -> f64 {
        low_value * (1.0 - self.fraction) + high_value * self.fraction
    }
}

/// Locates `value` among strictly increasing `breakpoints`.
///
/// Values at or beyond either end clamp to that end. A value that cannot be
/// placed at all (NaN) lands on the first breakpoint.
pub fn find_bracket(breakpoints: &[f64], value: f64) -> Bracket {
    let Some(&first) = breakpoints.first() else {
        return Bracket::exact(0);
    };
    let last_index = breakpoints.len() - 1;

    if value <= first {
        return Bracket::exact(0);
    }
    if value >= breakpoints[last_index] {
        return Bracket::exact(last_index);
    }

    breakpoints
        .windows(2)
        .position(|pair| value >= pair[0] && value < pair[1])
        .map(|low| {
            let (a, b) = (breakpoints[low], breakpoints[low + 1]);
            Bracket {
                low,
                high: low + 1,
                fraction: (value - a) / (b - a),
            }
        })
        .unwrap_or_else(|| Bracket::exact(0))
}
