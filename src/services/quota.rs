use chrono::NaiveDate;

use crate::models::User;

/// The daily generation counter as a value object: the stored counter plus
/// the calendar day it belongs to. `apply` is pure so the rollover logic can
/// be tested with injected dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuota {
    pub used: i64,
    pub day: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy)]
pub struct QuotaDecision {
    pub allowed: bool,
    /// Attempts remaining after this request; `None` for premium accounts.
    pub remaining: Option<i64>,
    /// State to persist when the request is allowed.
    pub next: DailyQuota,
}

impl DailyQuota {
    pub fn from_user(user: &User) -> Self {
        Self {
            used: user.requests_today,
            day: user.last_request_date,
        }
    }

    pub fn apply(&self, today: NaiveDate, premium: bool, limit: i64) -> QuotaDecision {
        // Counter resets the first time a request arrives on a new day.
        let used = if self.day == Some(today) { self.used } else { 0 };

        if premium {
            // Premium keeps the counter for historical usage only.
            return QuotaDecision {
                allowed: true,
                remaining: None,
                next: DailyQuota {
                    used: used + 1,
                    day: Some(today),
                },
            };
        }

        if used >= limit {
            return QuotaDecision {
                allowed: false,
                remaining: Some(0),
                next: DailyQuota {
                    used,
                    day: Some(today),
                },
            };
        }

        QuotaDecision {
            allowed: true,
            remaining: Some(limit - (used + 1)),
            next: DailyQuota {
                used: used + 1,
                day: Some(today),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_fresh_user_gets_two_requests() {
        let today = day("2024-03-01");
        let mut quota = DailyQuota { used: 0, day: None };

        let first = quota.apply(today, false, 2);
        assert!(first.allowed);
        assert_eq!(first.remaining, Some(1));
        quota = first.next;

        let second = quota.apply(today, false, 2);
        assert!(second.allowed);
        assert_eq!(second.remaining, Some(0));
        quota = second.next;

        let third = quota.apply(today, false, 2);
        assert!(!third.allowed);
        assert_eq!(third.remaining, Some(0));
        // Denied requests do not mutate state.
        assert_eq!(third.next, quota);
    }

    #[test]
    fn test_counter_resets_on_day_rollover() {
        let quota = DailyQuota {
            used: 2,
            day: Some(day("2024-03-01")),
        };

        let tomorrow = day("2024-03-02");
        let decision = quota.apply(tomorrow, false, 2);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, Some(1));
        assert_eq!(decision.next.used, 1);
        assert_eq!(decision.next.day, Some(tomorrow));
    }

    #[test]
    fn test_premium_never_denied() {
        let today = day("2024-03-01");
        let mut quota = DailyQuota { used: 0, day: None };

        for _ in 0..50 {
            let decision = quota.apply(today, true, 2);
            assert!(decision.allowed);
            assert_eq!(decision.remaining, None);
            quota = decision.next;
        }

        // Usage is still tracked for premium accounts.
        assert_eq!(quota.used, 50);
    }
}
