//! CLI type enums for timing strategies, scaling policies and output formats

/// Source of gemm timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GemmTimeStrategy {
    /// Measured timings from a precomputed benchmark table; accurate for
    /// every shape the table covers
    #[default]
    Benchmarks,
    /// Closed-form roofline estimate; only accurate for large shapes
    Roofline,
}

impl std::str::FromStr for GemmTimeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "benchmarks" => Ok(GemmTimeStrategy::Benchmarks),
            "roofline" => Ok(GemmTimeStrategy::Roofline),
            _ => Err(format!(
                "Unknown gemm time strategy: {s}. Valid strategies: benchmarks, roofline"
            )),
        }
    }
}

impl std::fmt::Display for GemmTimeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GemmTimeStrategy::Benchmarks => write!(f, "benchmarks"),
            GemmTimeStrategy::Roofline => write!(f, "roofline"),
        }
    }
}

/// Scale-factor policy for casting one tensor to float8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingPolicy {
    /// Compute the scale from the current tensor (extra max-abs pass)
    #[default]
    Dynamic,
    /// Reuse a scale derived from previous iterations
    Delayed,
}

impl std::str::FromStr for ScalingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dynamic" => Ok(ScalingPolicy::Dynamic),
            "delayed" => Ok(ScalingPolicy::Delayed),
            _ => Err(format!(
                "Unknown scaling policy: {s}. Valid policies: dynamic, delayed"
            )),
        }
    }
}

impl std::fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalingPolicy::Dynamic => write!(f, "dynamic"),
            ScalingPolicy::Delayed => write!(f, "delayed"),
        }
    }
}

/// Output format for the estimate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
