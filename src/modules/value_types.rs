use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attendance status for a single session, serialized as "Present"/"Absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}
