// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarDate, DayMask, DomainError, EntityKind, SessionContext, TimeOfDay};

#[test]
fn test_time_of_day_parses_digits() {
    assert_eq!("0800".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(800));
    assert_eq!("1700".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(1700));
    assert_eq!("0".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(0));
    assert_eq!(" 0930 ".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(930));
}

#[test]
fn test_time_of_day_rejects_non_numeric() {
    assert!("08:00".parse::<TimeOfDay>().is_err());
    assert!("noon".parse::<TimeOfDay>().is_err());
    assert!("".parse::<TimeOfDay>().is_err());
    assert!("12345".parse::<TimeOfDay>().is_err());
    assert!("-100".parse::<TimeOfDay>().is_err());
}

#[test]
fn test_time_of_day_orders_like_zero_padded_strings() {
    let early: TimeOfDay = "0800".parse().unwrap();
    let late: TimeOfDay = "1700".parse().unwrap();
    assert!(early < late);
    assert_eq!(early.to_string(), "0800");
}

#[test]
fn test_calendar_date_requires_eight_digits() {
    let date: CalendarDate = "20110215".parse().unwrap();
    assert_eq!(date, CalendarDate::from_ymd(2011, 2, 15));
    assert_eq!(date.year(), 2011);
    assert_eq!(date.month(), 2);
    assert_eq!(date.day(), 15);

    assert!("2011215".parse::<CalendarDate>().is_err());
    assert!("2011-02-15".parse::<CalendarDate>().is_err());
    assert!("201102150".parse::<CalendarDate>().is_err());
}

#[test]
fn test_calendar_date_orders_like_strings() {
    let jan: CalendarDate = "20110101".parse().unwrap();
    let feb: CalendarDate = "20110215".parse().unwrap();
    let prior: CalendarDate = "20101231".parse().unwrap();
    assert!(prior < jan);
    assert!(jan < feb);
    assert_eq!(jan.to_string(), "20110101");
}

#[test]
fn test_day_mask_parse_and_contains() {
    let weekdays: DayMask = "23456".parse().unwrap();
    for day in 2..=6 {
        assert!(weekdays.contains(day));
    }
    assert!(!weekdays.contains(1));
    assert!(!weekdays.contains(7));
    assert!(!weekdays.contains(0));
    assert!(!weekdays.contains(8));
    assert_eq!(weekdays.to_string(), "23456");
}

#[test]
fn test_day_mask_ignores_order_and_repeats() {
    let mask: DayMask = "7117".parse().unwrap();
    assert_eq!(mask.digits(), vec![1, 7]);
}

#[test]
fn test_day_mask_rejects_other_characters() {
    assert!("0".parse::<DayMask>().is_err());
    assert!("8".parse::<DayMask>().is_err());
    assert!("2,3".parse::<DayMask>().is_err());
    assert!("".parse::<DayMask>().is_err());
    assert_eq!(DayMask::from_digits(&[9]), Err(DomainError::InvalidDayDigit(9)));
}

#[test]
fn test_entity_kind_round_trip_labels() {
    for kind in [
        EntityKind::User,
        EntityKind::Role,
        EntityKind::AdminRole,
        EntityKind::UserRole,
        EntityKind::UserAdminRole,
    ] {
        assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
    }
    assert_eq!("ROLE".parse::<EntityKind>().unwrap(), EntityKind::Role);
    assert!("group".parse::<EntityKind>().is_err());
}

#[test]
fn test_entity_kind_classification() {
    assert!(!EntityKind::User.is_role());
    assert!(EntityKind::AdminRole.is_role());
    assert!(EntityKind::AdminRole.is_administrative());
    assert!(EntityKind::UserAdminRole.is_administrative());
    assert!(!EntityKind::Role.is_administrative());
    assert!(!EntityKind::UserRole.is_administrative());
    assert!(EntityKind::Role.participates_in_sod());
    assert!(EntityKind::UserRole.participates_in_sod());
    assert!(!EntityKind::AdminRole.participates_in_sod());
    assert!(!EntityKind::UserAdminRole.participates_in_sod());
    assert!(!EntityKind::User.participates_in_sod());
}

#[test]
fn test_session_context_defaults_to_never_accessed() {
    let ctx: SessionContext<'_> = SessionContext::new("jdoe");
    assert_eq!(ctx.user_id(), "jdoe");
    assert_eq!(ctx.last_access_millis(), 0);
    assert!(ctx.active_roles().is_empty());
}

#[test]
fn test_session_context_role_lookup_ignores_case() {
    let roles: Vec<String> = vec![String::from("Auditor")];
    let ctx: SessionContext<'_> = SessionContext::new("jdoe")
        .with_last_access(42)
        .with_active_roles(&roles);
    assert!(ctx.has_active_role("auditor"));
    assert!(!ctx.has_active_role("teller"));
    assert_eq!(ctx.last_access_millis(), 42);
}
