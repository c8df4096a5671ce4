use term_desk::geometry::{Point, Size};
use term_desk::window::manager::DesktopManager;
use term_desk::window::{WindowId, WindowState};

const VIEWPORT: Size = Size {
    width: 1000,
    height: 800,
};

#[test]
fn full_session_open_interact_close() {
    let mut desk = DesktopManager::new();
    let about = WindowId("about");
    let projects = WindowId("projects");

    desk.open(about, VIEWPORT);
    desk.open(projects, VIEWPORT);
    assert_eq!(desk.taskbar().len(), 2);
    assert_eq!(desk.active_window(), Some(projects));
    assert_eq!(desk.stacked(), vec![about, projects]);

    // drag "about" out from under "projects"
    let frame = desk.frame(about).unwrap();
    assert!(desk.begin_drag(about, Point::new(frame.x + 10, frame.y + 5)));
    assert_eq!(desk.active_window(), Some(about));
    desk.drag_move(Point::new(60, 45), VIEWPORT);
    desk.end_interaction();
    assert_eq!(desk.stacked(), vec![projects, about]);

    // resize it from the corner
    let frame = desk.frame(about).unwrap();
    assert!(desk.begin_resize(about, Point::new(frame.right() - 1, frame.bottom() - 1)));
    desk.resize_move(Point::new(frame.right() + 99, frame.bottom() + 49));
    desk.end_interaction();
    let frame = desk.frame(about).unwrap();
    assert_eq!((frame.width, frame.height), (550, 400));

    // minimize from the taskbar, restore, then close everything
    desk.taskbar_click(about, VIEWPORT);
    assert_eq!(desk.state(about), WindowState::Minimized);
    assert_eq!(desk.taskbar().len(), 2);
    desk.taskbar_click(about, VIEWPORT);
    assert_eq!(desk.state(about), WindowState::Open);
    desk.close(about);
    desk.close(projects);
    assert!(desk.taskbar().is_empty());
    assert_eq!(desk.active_window(), None);
}

#[test]
fn windows_never_escape_the_viewport() {
    let mut desk = DesktopManager::new();
    let skills = WindowId("skills");
    desk.open(skills, VIEWPORT);
    let frame = desk.frame(skills).unwrap();
    assert!(desk.begin_drag(skills, Point::new(frame.x + 1, frame.y + 1)));
    for (x, y) in [(-500, -500), (5000, 0), (0, 5000), (5000, 5000)] {
        desk.drag_move(Point::new(x, y), VIEWPORT);
        let frame = desk.frame(skills).unwrap();
        assert!(frame.x >= 0 && frame.y >= 0);
        assert!(frame.right() <= VIEWPORT.width);
        assert!(frame.bottom() <= VIEWPORT.height - 48);
    }
}

#[test]
fn maximize_survives_minimize_round_trip() {
    let mut desk = DesktopManager::new();
    let contact = WindowId("contact");
    desk.open(contact, VIEWPORT);
    let original = desk.frame(contact).unwrap();
    desk.toggle_maximize(contact, VIEWPORT);
    desk.minimize(contact);
    assert_eq!(desk.state(contact), WindowState::Minimized);

    // restoring from the taskbar keeps the maximized frame
    desk.taskbar_click(contact, VIEWPORT);
    assert_eq!(desk.state(contact), WindowState::Maximized);
    assert_eq!(desk.frame(contact).unwrap().width, VIEWPORT.width);

    // un-maximizing returns to the pre-maximize geometry
    desk.toggle_maximize(contact, VIEWPORT);
    assert_eq!(desk.frame(contact).unwrap(), original);
}

#[test]
fn reopen_after_close_recenters() {
    let mut desk = DesktopManager::new();
    let about = WindowId("about");
    desk.open(about, VIEWPORT);
    let centered = desk.frame(about).unwrap();

    let grab = Point::new(centered.x + 5, centered.y + 5);
    assert!(desk.begin_drag(about, grab));
    desk.drag_move(Point::new(5, 5), VIEWPORT);
    desk.end_interaction();
    assert_ne!(desk.frame(about).unwrap(), centered);

    // close discards the geometry; a fresh open centers again
    desk.close(about);
    desk.open(about, VIEWPORT);
    assert_eq!(desk.frame(about).unwrap(), centered);
}

#[test]
fn gestures_are_exclusive_and_releasable_anywhere() {
    let mut desk = DesktopManager::new();
    let about = WindowId("about");
    desk.open(about, VIEWPORT);
    let frame = desk.frame(about).unwrap();
    assert!(desk.begin_resize(about, Point::new(frame.right() - 1, frame.bottom() - 1)));
    assert!(!desk.begin_drag(about, Point::new(frame.x + 1, frame.y + 1)));

    // release far outside any window still ends the gesture
    desk.end_interaction();
    assert!(!desk.is_resizing());
    assert!(desk.begin_drag(about, Point::new(frame.x + 1, frame.y + 1)));
    desk.end_interaction();
}

#[test]
fn small_viewport_still_produces_valid_frames() {
    let tiny = Size {
        width: 300,
        height: 200,
    };
    let mut desk = DesktopManager::new();
    let about = WindowId("about");
    // default window (450x350) does not fit: it pins to the origin
    desk.open(about, tiny);
    let frame = desk.frame(about).unwrap();
    assert_eq!((frame.x, frame.y), (0, 0));
    assert_eq!((frame.width, frame.height), (450, 350));
}
