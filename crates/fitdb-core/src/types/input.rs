use crate::types::Field;

slug_enum! {
    ///
    /// ExerciseInput
    /// Value families an exercise may record on each of its results.
    ///
    pub enum ExerciseInput ("exercise input") {
        Reps => "reps",
        WeightLbs => "weightLbs",
        DistanceMiles => "distanceMiles",
        DurationMinutes => "durationMinutes",
        Watts => "watts",
        SpeedMph => "speedMph",
        Calories => "calories",
        Resistance => "resistance",
    }
}

impl ExerciseInput {
    /// Result field that stores the values of this input.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::Reps => Field::Reps,
            Self::WeightLbs => Field::WeightLbs,
            Self::DistanceMiles => Field::DistanceMiles,
            Self::DurationMinutes => Field::DurationMinutes,
            Self::Watts => Field::Watts,
            Self::SpeedMph => Field::SpeedMph,
            Self::Calories => Field::Calories,
            Self::Resistance => Field::Resistance,
        }
    }
}

slug_enum! {
    ///
    /// MeasurementInput
    /// The single value family a measurement records on each of its results.
    ///
    pub enum MeasurementInput ("measurement input") {
        HeightWeightLbs => "heightWeightLbs",
        Percent => "percent",
        Inches => "inches",
        Lbs => "lbs",
    }
}

impl MeasurementInput {
    /// Result field that stores the value of this input.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::HeightWeightLbs => Field::HeightWeightLbs,
            Self::Percent => Field::Percent,
            Self::Inches => Field::Inches,
            Self::Lbs => Field::Lbs,
        }
    }
}

slug_enum! {
    ///
    /// Severity
    ///
    pub enum Severity ("severity") {
        Debug => "DEBUG",
        Info => "INFO",
        Warn => "WARN",
        Error => "ERROR",
    }
}

slug_enum! {
    ///
    /// SettingKey
    /// Keys of every setting the application stores.
    ///
    pub enum SettingKey ("setting key") {
        ShowWelcome => "show-welcome-overlay",
        ShowDescriptions => "show-dashboard-descriptions",
        DarkMode => "dark-mode",
        ShowConsoleLogs => "show-console-logs",
        ShowInfoMessages => "show-info-messages",
        LogRetentionTime => "log-retention-time",
    }
}

slug_enum! {
    ///
    /// LogRetention
    /// How long log records are kept before they may be pruned.
    ///
    pub enum LogRetention ("log retention") {
        OneWeek => "7 Days",
        ThreeMonths => "90 Days",
        OneYear => "One Year",
        Forever => "Forever",
    }
}

impl LogRetention {
    pub const MS_PER_DAY: i64 = 86_400_000;

    /// Retention window in milliseconds, `None` when logs are kept forever.
    #[must_use]
    pub const fn as_millis(self) -> Option<i64> {
        match self {
            Self::OneWeek => Some(7 * Self::MS_PER_DAY),
            Self::ThreeMonths => Some(90 * Self::MS_PER_DAY),
            Self::OneYear => Some(365 * Self::MS_PER_DAY),
            Self::Forever => None,
        }
    }

    /// Oldest log timestamp still retained at `now_ms`.
    #[must_use]
    pub const fn cutoff(self, now_ms: i64) -> Option<i64> {
        match self.as_millis() {
            Some(window) => Some(now_ms.saturating_sub(window)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_input_maps_to_a_distinct_result_field() {
        let mut fields: Vec<Field> = ExerciseInput::ALL.iter().map(|i| i.field()).collect();
        fields.extend(MeasurementInput::ALL.iter().map(|i| i.field()));
        let count = fields.len();

        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), count);
    }

    #[test]
    fn input_slugs_match_their_result_field() {
        for input in ExerciseInput::ALL {
            assert_eq!(input.as_str(), input.field().as_str());
        }
        for input in MeasurementInput::ALL {
            assert_eq!(input.as_str(), input.field().as_str());
        }
    }

    #[test]
    fn retention_cutoff() {
        let now = 1_000 * LogRetention::MS_PER_DAY;

        assert_eq!(
            LogRetention::OneWeek.cutoff(now),
            Some(993 * LogRetention::MS_PER_DAY)
        );
        assert_eq!(LogRetention::Forever.cutoff(now), None);
    }
}
