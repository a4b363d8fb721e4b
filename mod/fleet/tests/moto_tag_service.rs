use mottag_core::{PageParams, ServiceError};
use mottag_fleet::model::{CreateMoto, CreateTag, MotoStatus, TagType, UpdateMoto, UpdateTag, YardInput};
use mottag_fleet::service::FleetService;
use mottag_fleet::service::moto::MotoFilters;
use mottag_sql::SqliteStore;

fn service() -> FleetService {
    FleetService::new(Box::new(SqliteStore::open_in_memory().unwrap())).unwrap()
}

fn with_yard(svc: &FleetService) -> String {
    svc.create_yard(YardInput {
        name: "Central".into(),
        city: "Sao Paulo".into(),
        state: "SP".into(),
        country: "BR".into(),
        area_m2: 1000.0,
    })
    .unwrap()
    .id
}

fn moto(yard_id: &str, plate: &str) -> CreateMoto {
    CreateMoto {
        yard_id: yard_id.to_string(),
        plate: plate.to_string(),
        model: "CG 160".into(),
        status: None,
    }
}

fn tag(serial: &str, moto_id: Option<&str>) -> CreateTag {
    CreateTag {
        moto_id: moto_id.map(String::from),
        serial: serial.to_string(),
        tag_type: TagType::V1,
        battery_pct: 50,
    }
}

// ── Motos ──

#[test]
fn create_moto_roundtrip_and_default_status() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let created = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();
    assert_eq!(created.status, MotoStatus::Available);

    let fetched = svc.get_moto(&created.id).unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.yard_id, yard_id);
}

#[test]
fn create_moto_with_explicit_status() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let created = svc
        .create_moto(CreateMoto {
            status: Some(MotoStatus::Maintenance),
            ..moto(&yard_id, "ABC1234")
        })
        .unwrap();
    assert_eq!(created.status, MotoStatus::Maintenance);
}

#[test]
fn create_moto_missing_yard_is_not_found() {
    let svc = service();
    let err = svc.create_moto(moto("no-such-yard", "ABC1234")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
}

#[test]
fn duplicate_plate_conflicts() {
    let svc = service();
    let yard_id = with_yard(&svc);
    svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();
    let err = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
}

#[test]
fn invalid_plate_fails_validation() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let err = svc.create_moto(moto(&yard_id, "1234ABC")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)), "got {err:?}");
}

#[test]
fn update_moto_touches_only_model_and_status() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let created = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();

    let updated = svc
        .update_moto(
            &created.id,
            UpdateMoto {
                model: "XRE 300".into(),
                status: MotoStatus::InUse,
            },
        )
        .unwrap();
    assert_eq!(updated.model, "XRE 300");
    assert_eq!(updated.status, MotoStatus::InUse);
    // Immutable fields preserved.
    assert_eq!(updated.plate, "ABC1234");
    assert_eq!(updated.yard_id, yard_id);
}

#[test]
fn update_missing_moto_is_not_found() {
    let svc = service();
    let err = svc
        .update_moto(
            "no-such-id",
            UpdateMoto {
                model: "XRE 300".into(),
                status: MotoStatus::Available,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn list_motos_with_filters() {
    let svc = service();
    let yard_a = with_yard(&svc);
    let yard_b = svc
        .create_yard(YardInput {
            name: "Norte".into(),
            city: "Campinas".into(),
            state: "SP".into(),
            country: "BR".into(),
            area_m2: 800.0,
        })
        .unwrap()
        .id;

    svc.create_moto(moto(&yard_a, "AAA1111")).unwrap();
    svc.create_moto(CreateMoto {
        status: Some(MotoStatus::Maintenance),
        ..moto(&yard_a, "BBB2222")
    })
    .unwrap();
    svc.create_moto(moto(&yard_b, "CCC3333")).unwrap();

    let page = PageParams::default();

    let by_yard = svc
        .list_motos(
            &MotoFilters { yard_id: Some(yard_a.clone()), ..Default::default() },
            None,
            None,
            &page,
        )
        .unwrap();
    assert_eq!(by_yard.total, 2);

    let by_status = svc
        .list_motos(
            &MotoFilters { status: Some(MotoStatus::Maintenance), ..Default::default() },
            None,
            None,
            &page,
        )
        .unwrap();
    assert_eq!(by_status.total, 1);
    assert_eq!(by_status.items[0].plate, "BBB2222");

    // Plate filter is exact match, trimmed.
    let by_plate = svc
        .list_motos(
            &MotoFilters { plate: Some("  CCC3333  ".into()), ..Default::default() },
            None,
            None,
            &page,
        )
        .unwrap();
    assert_eq!(by_plate.total, 1);
    assert_eq!(by_plate.items[0].yard_id, yard_b);
}

#[test]
fn motos_paginate_sorted_by_plate() {
    let svc = service();
    let yard_id = with_yard(&svc);
    for i in 1..=7 {
        svc.create_moto(moto(&yard_id, &format!("ABC{:04}", i))).unwrap();
    }

    let k = 3;
    let total_pages = 7_u64.div_ceil(k as u64);
    assert_eq!(total_pages, 3);

    let page1 = svc
        .list_motos(&MotoFilters::default(), None, None, &PageParams::new(Some(1), Some(k)))
        .unwrap();
    let page2 = svc
        .list_motos(&MotoFilters::default(), None, None, &PageParams::new(Some(2), Some(k)))
        .unwrap();
    let page3 = svc
        .list_motos(&MotoFilters::default(), None, None, &PageParams::new(Some(3), Some(k)))
        .unwrap();

    assert_eq!(page1.items.len(), 3);
    assert_eq!(page3.items.len(), 1);
    assert!(page1.has_next && !page1.has_prev);
    assert!(page3.has_prev && !page3.has_next);

    // Item K+1 overall is the first item of page 2.
    assert_eq!(page2.items[0].plate, "ABC0004");
}

#[test]
fn moto_delete_is_idempotent() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let created = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();
    svc.delete_moto(&created.id).unwrap();
    svc.delete_moto(&created.id).unwrap();
    svc.delete_moto("never-existed").unwrap();
}

// ── Tags ──

#[test]
fn tag_roundtrip_with_defaults() {
    let svc = service();
    let created = svc.create_tag(tag("SN-001", None)).unwrap();
    assert_eq!(created.tag_type, TagType::V1);
    assert_eq!(created.battery_pct, 50);
    assert!(created.moto_id.is_none());
    assert!(created.last_seen_at.is_none());
    assert_eq!(svc.get_tag(&created.id).unwrap(), created);
}

#[test]
fn duplicate_serial_conflicts() {
    let svc = service();
    svc.create_tag(tag("SN-001", None)).unwrap();
    let err = svc.create_tag(tag("SN-001", None)).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
}

#[test]
fn tag_create_with_missing_moto_is_not_found() {
    let svc = service();
    let err = svc.create_tag(tag("SN-001", Some("no-such-moto"))).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
}

#[test]
fn second_tag_on_same_moto_conflicts() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let m = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();

    svc.create_tag(tag("SN-001", Some(&m.id))).unwrap();
    let err = svc.create_tag(tag("SN-002", Some(&m.id))).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
}

#[test]
fn tag_update_keeps_serial_and_reruns_association_checks() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let m1 = svc.create_moto(moto(&yard_id, "AAA1111")).unwrap();
    let m2 = svc.create_moto(moto(&yard_id, "BBB2222")).unwrap();

    let t1 = svc.create_tag(tag("SN-001", Some(&m1.id))).unwrap();
    let t2 = svc.create_tag(tag("SN-002", None)).unwrap();

    // Re-affirming its own association passes the exclusion check.
    let kept = svc
        .update_tag(
            &t1.id,
            UpdateTag { moto_id: Some(m1.id.clone()), tag_type: TagType::V1, battery_pct: 70 },
        )
        .unwrap();
    assert_eq!(kept.serial, "SN-001");
    assert_eq!(kept.battery_pct, 70);

    // Another tag cannot take an occupied moto.
    let err = svc
        .update_tag(
            &t2.id,
            UpdateTag { moto_id: Some(m1.id.clone()), tag_type: TagType::V1, battery_pct: 50 },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // Moving to a free moto works, and frees the old one.
    svc.update_tag(
        &t1.id,
        UpdateTag { moto_id: Some(m2.id.clone()), tag_type: TagType::V1, battery_pct: 70 },
    )
    .unwrap();
    svc.update_tag(
        &t2.id,
        UpdateTag { moto_id: Some(m1.id.clone()), tag_type: TagType::V1, battery_pct: 50 },
    )
    .unwrap();

    // Reassigning to a missing moto is NotFound.
    let err = svc
        .update_tag(
            &t1.id,
            UpdateTag { moto_id: Some("no-such-moto".into()), tag_type: TagType::V1, battery_pct: 70 },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn deleting_moto_detaches_its_tag() {
    let svc = service();
    let yard_id = with_yard(&svc);
    let m = svc.create_moto(moto(&yard_id, "ABC1234")).unwrap();
    let t = svc.create_tag(tag("SN-001", Some(&m.id))).unwrap();

    svc.delete_moto(&m.id).unwrap();

    let detached = svc.get_tag(&t.id).unwrap();
    assert!(detached.moto_id.is_none());
    assert_eq!(detached.serial, "SN-001");
}

#[test]
fn list_tags_filters_by_exact_serial() {
    let svc = service();
    svc.create_tag(tag("SN-001", None)).unwrap();
    svc.create_tag(tag("SN-002", None)).unwrap();

    let page = PageParams::default();
    let result = svc.list_tags(Some(" SN-002 "), None, None, &page).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].serial, "SN-002");

    // Substring does not match.
    let result = svc.list_tags(Some("SN-"), None, None, &page).unwrap();
    assert_eq!(result.total, 0);
}

#[test]
fn tags_sort_by_serial_desc() {
    let svc = service();
    for serial in ["SN-002", "SN-001", "SN-003"] {
        svc.create_tag(tag(serial, None)).unwrap();
    }
    let result = svc
        .list_tags(None, None, Some("desc"), &PageParams::default())
        .unwrap();
    let serials: Vec<&str> = result.items.iter().map(|t| t.serial.as_str()).collect();
    assert_eq!(serials, ["SN-003", "SN-002", "SN-001"]);
}

#[test]
fn battery_out_of_range_fails_validation() {
    let svc = service();
    let err = svc
        .create_tag(CreateTag {
            moto_id: None,
            serial: "SN-001".into(),
            tag_type: TagType::V1,
            battery_pct: 120,
        })
        .unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert_eq!(errors[0].field, "batteryPct");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn tag_delete_is_idempotent() {
    let svc = service();
    let t = svc.create_tag(tag("SN-001", None)).unwrap();
    svc.delete_tag(&t.id).unwrap();
    svc.delete_tag(&t.id).unwrap();
    svc.delete_tag("never-existed").unwrap();
}
