use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub restaurant_id: Uuid,
    /// Next free position when absent.
    pub table_number: Option<u32>,
    pub seating_capacity: u32,
    pub is_available: bool,
    pub location: String,
}
