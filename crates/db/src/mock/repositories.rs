use mockall::mock;

use crate::models::{DbAssignedSlot, DbConflictSlot, DbSlotRow, DbTimetableSlot, SlotFields};

// Mock repositories for testing
mock! {
    pub TimetableRepo {
        pub async fn get_slot(&self, slot_id: i64) -> eyre::Result<Option<DbTimetableSlot>>;

        pub async fn list_class_slots(&self, class_id: i64) -> eyre::Result<Vec<DbSlotRow>>;

        pub async fn insert_slot(&self, class_id: i64, fields: SlotFields) -> eyre::Result<i64>;

        pub async fn update_slot(&self, slot_id: i64, fields: SlotFields) -> eyre::Result<()>;

        pub async fn delete_slot(&self, slot_id: i64) -> eyre::Result<()>;

        pub async fn find_teacher_conflicts(
            &self,
            teacher_user_id: i64,
            day_of_week: &'static str,
            start_time: &'static str,
            end_time: &'static str,
            exclude_slot_id: Option<i64>,
        ) -> eyre::Result<Vec<DbConflictSlot>>;

        pub async fn list_assigned_slots(
            &self,
            class_id: i64,
        ) -> eyre::Result<Vec<DbAssignedSlot>>;
    }
}

mock! {
    pub SchoolRepo {
        pub async fn class_exists(&self, class_id: i64) -> eyre::Result<bool>;

        pub async fn subject_exists(&self, subject_id: i64) -> eyre::Result<bool>;

        pub async fn teacher_exists(&self, teacher_user_id: i64) -> eyre::Result<bool>;
    }
}
