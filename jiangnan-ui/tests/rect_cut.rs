#[cfg(test)]
mod tests {
    use jiangnan_ui::Rect;

    #[test]
    fn test_cut() {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);

        // 视频页顶部 80 作为标题栏
        let (band, body) = screen.split_top(80.0);
        assert_eq!(band, Rect::new(0.0, 0.0, 800.0, 80.0));
        assert_eq!(body, Rect::new(0.0, 80.0, 800.0, 520.0));

        // 选项按钮左侧留白
        let option = Rect::new(150.0, 250.0, 500.0, 40.0);
        let (pad, text) = option.split_left(20.0);
        assert_eq!(pad, Rect::new(150.0, 250.0, 20.0, 40.0));
        assert_eq!(text, Rect::new(170.0, 250.0, 480.0, 40.0));

        let (all, rest) = option.split_top(100.0);
        assert_eq!(all, option);
        assert_eq!(rest.h, 0.0);
    }

    #[test]
    fn test_center_and_contains() {
        let board = Rect::new(450.0, 150.0, 300.0, 300.0);
        assert_eq!(board.center_point(), (600.0, 300.0));
        assert_eq!(board.right(), 750.0);
        assert_eq!(Rect::from_center(400.0, 500.0, 800.0, 100.0), Rect::new(0.0, 450.0, 800.0, 100.0));

        assert!(board.contains(450.0, 150.0));
        assert!(!board.contains(750.0, 300.0));

        let moved = board.with_pos(50.0, 150.0);
        assert_eq!(moved, Rect::new(50.0, 150.0, 300.0, 300.0));
    }
}
