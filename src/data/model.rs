// ---------------------------------------------------------------------------
// Series – one section of the log
// ---------------------------------------------------------------------------

/// One run of (x, y) samples, delimited by `#` marker lines in the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// X axis (time).
    pub x: Vec<f64>,
    /// Y axis (force) – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    /// Append one sample. Samples enter pairwise, so `x` and `y` stay the
    /// same length.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate samples as `[x, y]` pairs, in file order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed log
// ---------------------------------------------------------------------------

/// All series parsed from one log file, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
