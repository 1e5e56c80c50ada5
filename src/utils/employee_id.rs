use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

pub const EMPLOYEE_ID_PREFIX: &str = "EMP";

/// Millisecond stamp of the most recently issued id.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Issues `EMP<unix millis>`. Ids are strictly increasing within the
/// process: a second call inside the same millisecond is bumped forward.
pub fn generate_employee_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ISSUED.load(Ordering::Relaxed);

    loop {
        let next = now.max(prev + 1);
        match LAST_ISSUED.compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return format!("{EMPLOYEE_ID_PREFIX}{next}"),
            Err(actual) => prev = actual,
        }
    }
}

/// True for ids of the generated shape `EMP<digits>`.
#[cfg(test)]
pub(crate) fn is_generated_shape(id: &str) -> bool {
    id.strip_prefix(EMPLOYEE_ID_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
