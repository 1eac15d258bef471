#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DriverState {
    Inactive, // Nothing scheduled, no tick can fire
    Active,   // Immediate tick done, periodic ticks armed
}
