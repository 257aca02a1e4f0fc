// Drives the exported surface the way the host page does.

use portfolio_scenes::Portfolio;

fn portfolio() -> Portfolio {
    let Ok(p) = Portfolio::new(None) else {
        panic!("default config should load");
    };
    p
}

fn page() -> Portfolio {
    let mut p = portfolio();
    p.mount_logo();
    assert!(p.mount_background(1280, 720).is_ok());
    for id in p.project_containers() {
        assert!(p.mount_project(&id, 320, 240).is_ok());
    }
    p
}

#[test]
fn containers_match_page_ids() {
    let p = portfolio();
    assert_eq!(p.logo_container(), "logo-3d");
    assert_eq!(p.background_container(), "particles-js");
    assert_eq!(
        p.project_containers(),
        ["project-heart", "project-eog", "project-stormy", "project-signal"]
    );
}

#[test]
fn buffers_are_exposed_after_frames() {
    let mut p = page();
    for frame in 0..3 {
        p.pointer_move(640.0, 360.0, 1280.0, 720.0);
        p.frame(frame as f32 * 16.0);
    }

    assert_eq!(p.logo_size(), 50);
    assert_eq!(p.logo_nodes_len(), 12 * 3);
    assert!(!p.logo_nodes_ptr().is_null());
    assert_eq!(p.logo_links_len() % 6, 0);
    assert_eq!(p.background_positions_len(), 120 * 3);
    assert_eq!(p.logo_transform().len(), 7);
    assert_eq!(p.background_camera().len(), 10);

    assert_eq!(p.project_positions_len("project-signal"), 100 * 3);
    assert_eq!(p.project_normals_len("project-signal"), 0);
    assert!(p.project_indices("project-signal").is_empty());
    assert_eq!(p.project_normals_len("project-stormy"), 21 * 21 * 3);
    assert_eq!(p.project_indices("project-eog").len(), 100 * 16 * 6);
    assert_eq!(p.project_kind("project-stormy"), "pool");
    assert_eq!(p.project_color("project-heart"), 0xef4444);
}

#[test]
fn unmounted_scenes_expose_nothing() {
    let p = portfolio();
    assert!(p.logo_nodes_ptr().is_null());
    assert_eq!(p.logo_nodes_len(), 0);
    assert!(p.project_transform("project-heart").is_empty());
    assert_eq!(p.cursor("project-heart"), "grab");
}

#[test]
fn drag_and_double_click() {
    let mut p = page();
    assert!(p.project_pointer_move("project-heart", 10.0, 10.0).is_ok());
    assert_eq!(p.project_pointer_down("project-heart").ok().as_deref(), Some("grabbing"));
    assert!(p.project_pointer_move("project-heart", 12.0, 10.0).is_ok());
    assert!((p.project_transform("project-heart")[4] - 0.02).abs() < 1e-6);
    assert_eq!(p.pointer_up(), ["project-heart"]);
    assert_eq!(p.cursor("project-heart"), "grab");

    assert_eq!(
        p.project_double_click("project-heart").ok().flatten().as_deref(),
        Some("project-heart.html")
    );
}

#[test]
fn colour_tables_are_exported() {
    let p = portfolio();
    assert_eq!(p.logo_style(), [0x06b6d4 as f32, 0x8b5cf6 as f32, 0.5]);
    assert_eq!(p.background_style(), [0x3b82f6 as f32, 0x2563eb as f32, 0.15]);
    assert_eq!(p.logo_style()[0] as u32, 0x06b6d4);

    let Ok(custom) = Portfolio::new(Some(r#"{"logo": {"link_opacity": 0.8}}"#.into())) else {
        panic!("override should load");
    };
    assert_eq!(custom.logo_style()[2], 0.8);
}
