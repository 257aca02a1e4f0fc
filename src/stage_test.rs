use super::*;
use crate::config::ProjectKind;

fn mounted() -> Stage {
    let mut stage = Stage::new(SiteConfig::default());
    stage.mount_logo();
    stage.mount_background(1600, 900).unwrap();
    let ids: Vec<String> = stage.project_ids().map(String::from).collect();
    for id in ids {
        stage.mount_project(&id, 400, 300).unwrap();
    }
    stage
}

// =============================================================
// Bootstrapping
// =============================================================

#[test]
fn nothing_mounted_by_default() {
    let stage = Stage::new(SiteConfig::default());
    assert!(stage.logo().is_none());
    assert!(stage.background().is_none());
    assert!(stage.project("project-heart").is_none());
}

#[test]
fn missing_containers_are_skipped() {
    // Only the signal preview exists on this page
    let mut stage = Stage::new(SiteConfig::default());
    stage.mount_project("project-signal", 300, 200).unwrap();
    stage.frame(100.0);
    assert!(stage.project("project-signal").is_some());
    assert!(stage.project("project-heart").is_none());
    assert_eq!(stage.project_pointer_down("project-heart").unwrap(), Action::None);
    assert_eq!(stage.project_double_click("project-heart").unwrap(), Action::None);
}

#[test]
fn unknown_container_is_an_error() {
    let mut stage = Stage::new(SiteConfig::default());
    assert!(matches!(stage.mount_project("project-x", 10, 10), Err(Error::UnknownProject(_))));
    assert!(stage.project_pointer_down("project-x").is_err());
}

#[test]
fn remount_replaces_preview() {
    let mut stage = mounted();
    stage.frame(0.0);
    stage.frame(16.0);
    stage.mount_project("project-eog", 200, 200).unwrap();
    let p = stage.project("project-eog").unwrap();
    assert_eq!(p.object.rotation.z, 0.0);
    assert_eq!(p.camera.aspect, 1.0);
}

#[test]
fn project_config_lookup() {
    let stage = Stage::new(SiteConfig::default());
    assert_eq!(stage.project_config("project-stormy").unwrap().kind, ProjectKind::Pool);
    assert!(stage.project_config("nope").is_err());
}

// =============================================================
// Frames
// =============================================================

#[test]
fn frame_advances_every_scene() {
    let mut stage = mounted();
    stage.frame(0.0);
    assert!(stage.logo().unwrap().group.rotation.y > 0.0);
    assert!(stage.project("project-eog").unwrap().object.rotation.z > 0.0);
    assert!(stage.background().unwrap().camera.position.x.abs() < 1e-6);
}

#[test]
fn pointer_drives_background_camera() {
    let mut stage = mounted();
    stage.pointer_move(1600.0, 0.0, 1600.0, 900.0);
    assert_eq!(stage.pointer(), Pointer { x: 1.0, y: 1.0 });
    stage.frame(0.0);
    let cam = stage.background().unwrap().camera;
    assert!(cam.position.x > 0.0 && cam.position.y > 0.0);
}

#[test]
fn resize_without_background_is_noop() {
    let mut stage = Stage::new(SiteConfig::default());
    assert!(stage.resize(0, 0).is_ok());
    let mut stage = mounted();
    assert!(stage.resize(0, 0).is_err());
    stage.resize(900, 900).unwrap();
    assert_eq!(stage.background().unwrap().camera.aspect, 1.0);
}

// =============================================================
// Interaction
// =============================================================

#[test]
fn drag_is_per_preview() {
    let mut stage = mounted();
    stage.project_pointer_move("project-heart", 0.0, 0.0).unwrap();
    stage.project_pointer_move("project-eog", 0.0, 0.0).unwrap();
    stage.project_pointer_down("project-heart").unwrap();

    stage.project_pointer_move("project-heart", 50.0, 0.0).unwrap();
    stage.project_pointer_move("project-eog", 50.0, 0.0).unwrap();
    assert!((stage.project("project-heart").unwrap().object.rotation.y - 0.5).abs() < 1e-6);
    assert_eq!(stage.project("project-eog").unwrap().object.rotation.y, 0.0);
}

#[test]
fn page_wide_pointer_up_releases_dragging_previews() {
    let mut stage = mounted();
    stage.project_pointer_down("project-heart").unwrap();
    stage.project_pointer_down("project-signal").unwrap();

    let released = stage.pointer_up();
    assert_eq!(
        released,
        vec![
            ("project-heart".to_string(), Action::SetCursor("grab")),
            ("project-signal".to_string(), Action::SetCursor("grab")),
        ]
    );
    assert!(!stage.project("project-heart").unwrap().is_dragging());
    assert!(stage.pointer_up().is_empty());
}

#[test]
fn double_click_yields_fixed_urls() {
    let stage = mounted();
    let urls: Vec<Action> = ["project-heart", "project-eog", "project-stormy", "project-signal"]
        .iter()
        .map(|id| stage.project_double_click(id).unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![
            Action::Navigate("project-heart.html".into()),
            Action::Navigate("project-eog.html".into()),
            Action::Navigate("project-stormy.html".into()),
            Action::Navigate("project-signal.html".into()),
        ]
    );
}
