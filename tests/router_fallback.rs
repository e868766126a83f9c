use tutor_shell::router::{self, PanelId};

#[test]
fn test_unknown_tag_falls_back_to_chat() {
    let before = router::fallback_count();

    assert_eq!(router::route_tag("calculator"), PanelId::Chat);
    assert_eq!(router::route_tag(""), PanelId::Chat);

    assert_eq!(router::fallback_count(), before + 2);
}
