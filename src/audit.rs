mod api_ext;
mod audit_action;
mod audit_log_entry;
mod audit_result;
mod time_period;

pub use self::{
    api_ext::AuditApi, audit_action::AuditAction, audit_log_entry::AuditLogEntry,
    audit_result::AuditResult, time_period::TimePeriod,
};
