slug_enum! {
    ///
    /// Field
    ///
    /// Every attribute that may appear on any record shape.
    /// A field shared by several types (`id`, `timestamp`, ...) is one variant,
    /// never one per type.
    ///
    pub enum Field ("field") {
        // core
        Id => "id",
        Timestamp => "timestamp",

        // log
        AutoId => "autoId",
        Severity => "severity",
        Label => "label",
        Details => "details",
        Message => "message",
        Stack => "stack",

        // setting
        Key => "key",
        Value => "value",

        // parent
        Name => "name",
        Desc => "desc",
        Enabled => "enabled",
        Favorited => "favorited",

        // child
        Active => "active",
        ParentId => "parentId",
        Note => "note",

        // workout
        ExerciseIds => "exerciseIds",

        // exercise
        ExerciseInputs => "exerciseInputs",

        // measurement
        MeasurementInput => "measurementInput",

        // workout result
        FinishedTimestamp => "finishedTimestamp",
        ExerciseResultIds => "exerciseResultIds",

        // exercise result
        Reps => "reps",
        WeightLbs => "weightLbs",
        DistanceMiles => "distanceMiles",
        DurationMinutes => "durationMinutes",
        Watts => "watts",
        SpeedMph => "speedMph",
        Calories => "calories",
        Resistance => "resistance",

        // measurement result
        HeightWeightLbs => "heightWeightLbs",
        Percent => "percent",
        Inches => "inches",
        Lbs => "lbs",
    }
}

impl Field {
    /// Identifier fields are managed by the system and never edited by hand.
    #[must_use]
    pub const fn is_identifier(self) -> bool {
        matches!(self, Self::Id | Self::AutoId | Self::ParentId)
    }
}
