use crate::settings::LessonSettings;

/// Speed a key has to reach to count as confident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Characters per minute.
    pub speed: f64,
}

impl Target {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn from_settings(settings: &LessonSettings) -> Self {
        Self::new(settings.target.speed)
    }

    /// Target time per keystroke in milliseconds.
    pub fn time_to_type(&self) -> f64 {
        60_000.0 / self.speed
    }

    /// 1 at or above target speed, proportionally less below it.
    pub fn confidence(&self, time_to_type: Option<f64>) -> Option<f64> {
        time_to_type.map(|t| {
            if t > 0.0 {
                (self.time_to_type() / t).min(1.0)
            } else {
                1.0
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_capped() {
        let target = Target::new(60.0);
        assert_eq!(target.time_to_type(), 1000.0);
        assert_eq!(target.confidence(None), None);
        assert_eq!(target.confidence(Some(2000.0)), Some(0.5));
        assert_eq!(target.confidence(Some(1000.0)), Some(1.0));
        assert_eq!(target.confidence(Some(250.0)), Some(1.0));
    }

    #[test]
    fn default_target() {
        let target = Target::from_settings(&LessonSettings::default());
        assert!((target.time_to_type() - 60_000.0 / 175.0).abs() < 1e-9);
    }
}
