use crate::habit::Habit;

/// Subscribers notified after every store mutation with the new collection.
pub trait HabitObserver: Send + Sync {
    fn habits_changed(&self, habits: &[Habit]);
}

impl<F> HabitObserver for F
where
    F: Fn(&[Habit]) + Send + Sync,
{
    fn habits_changed(&self, habits: &[Habit]) {
        self(habits)
    }
}
