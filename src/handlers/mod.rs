// Request handlers, grouped by API namespace.
//
// Every handler receives the document store from router state and, where
// relevant, the identity resolved by the authorization gate. Errors are
// returned as ApiError and never cross handler boundaries.

pub mod auth; // /api/auth/* - login and self-lookup
pub mod lms; // /api/lms/* - leave approval
pub mod pods; // /api/pods/* - pod details and recommendations
