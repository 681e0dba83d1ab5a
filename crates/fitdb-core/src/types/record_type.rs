slug_enum! {
    ///
    /// RecordType
    /// One kind of persisted record; doubles as the storage table name.
    ///
    pub enum RecordType ("record type") {
        Log => "log",
        Setting => "setting",
        Workout => "workout",
        Exercise => "exercise",
        Measurement => "measurement",
        WorkoutResult => "workout-result",
        ExerciseResult => "exercise-result",
        MeasurementResult => "measurement-result",
    }
}

impl RecordType {
    /// Dense position of this type inside `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

slug_enum! {
    ///
    /// Group
    ///
    /// Structural classification of a record type.
    /// Parents are user-defined templates, children are point-in-time results
    /// tied to one parent, internal types carry no relational structure.
    ///
    pub enum Group ("group") {
        Parent => "parent",
        Child => "child",
        Internal => "internal",
    }
}

slug_enum! {
    ///
    /// Action
    /// Operations a data view may offer for a record type.
    ///
    pub enum Action ("action") {
        Inspect => "Inspect",
        Create => "Create",
        Edit => "Edit",
        Delete => "Delete",
        Charts => "Charts",
    }
}
