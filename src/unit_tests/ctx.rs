use crate::models::app::{AppModel, AppModelField};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx, Event};
use crate::runtime::{Runtime, RuntimeAction, RuntimeEvent};
use crate::types::profile::Identity;
use crate::unit_tests::{core_events, TestEnv};
use assert_matches::assert_matches;

fn identity() -> Identity {
    Identity {
        id: "user".to_owned(),
        ..Identity::default()
    }
}

#[test]
fn set_identity() {
    let _env_mutex = TestEnv::reset();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(AppModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::SetIdentity(Some(identity()))),
        })
    });
    assert_eq!(runtime.model().unwrap().ctx, Ctx::new(Some(identity())));
    assert_matches!(
        rx.try_recv(),
        Ok(RuntimeEvent::NewState(fields)) if fields == vec![AppModelField::Ctx]
    );
    assert_eq!(
        core_events(&mut rx),
        vec![Event::IdentityChanged {
            user_id: Some("user".to_owned()),
        }]
    );
}

#[test]
fn same_identity_is_not_a_change() {
    let _env_mutex = TestEnv::reset();
    let (runtime, mut rx) =
        Runtime::<TestEnv, _>::new(AppModel::new(Some(identity())), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::SetIdentity(Some(identity()))),
        })
    });
    assert_matches!(rx.try_recv(), Err(_));
    assert!(TestEnv::requests().is_empty());
}

#[test]
fn update_field_only_touches_the_field() {
    let _env_mutex = TestEnv::reset();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(AppModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: Some(AppModelField::NotificationFeed),
            action: Action::Ctx(ActionCtx::SetIdentity(Some(identity()))),
        })
    });
    assert_eq!(runtime.model().unwrap().ctx, Ctx::default());
    assert_matches!(rx.try_recv(), Err(_));
}
