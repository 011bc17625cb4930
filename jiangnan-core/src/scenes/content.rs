//! Text and asset keys of the presentation.

pub const TITLE: &str = "数字江南·智慧苏州";
pub const TITLE_HINT: &str = "点击任意键继续...";
pub const CONTINUE_HINT: &str = "点击继续...";

pub const COVER_IMAGE: &str = "cover.jpg";
pub const GALLERY_DIR: &str = "image";
pub const GUIDE_IMAGE: &str = "guide.png";
pub const DEFAULT_PICTURE: &str = "fengjing2.jpg";
pub const PUZZLE_IMAGE: &str = "fengjing2.jpg";

pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub description: &'static str,
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        text: "苏州最大的园林是哪一座？",
        options: ["拙政园", "留园", "狮子林", "网师园"],
        correct: 0,
        description: "拙政园是苏州最大的古典园林。",
    },
    Question {
        text: "苏州园林最著名的造园理念是什么？",
        options: ["小中见大", "移步换景", "借景抄园", "虚实相生"],
        correct: 1,
        description: "移步换景是苏州园林的精髓。",
    },
    Question {
        text: "数字技术在苏州园林中的创新应用是？",
        options: ["VR实景导览", "电子讲解器", "环境监测", "智能灯光"],
        correct: 0,
        description: "VR实景导览让游客足不出户也能身临其境。",
    },
];

pub struct IntroPage {
    pub lines: &'static [&'static str],
    /// Side picture, the default picture when `None`
    pub picture: Option<&'static str>,
}

pub static INTRO_PAGES: [IntroPage; 3] = [
    IntroPage {
        lines: &[
            "拙政园，始建于明正德初年(1509-1516)，",
            "是苏州现存最大的古典园林。",
            "",
            "它以其独特的'一园三区'布局闻名于世，",
            "东区以建筑为主，中区以水景为主，",
            "西区以山景为主，体现了'咫尺之内，",
            "自成天地'的园林特色。",
            "",
            "园内亭台楼阁、山水花木相映成趣，",
            "处处体现'虽由人作，宛自天开'的意境。",
        ],
        picture: Some("zhuozhengyuan.jpg"),
    },
    IntroPage {
        lines: &[
            "苏州园林的'移步换景'是其最显著的特色，",
            "游客每走几步就能看到不同的景致。",
            "",
            "这种设计理念通过精心布局，将有限的",
            "空间营造出无限的景观变化。",
            "",
            "园中的曲廊、游廊既是观景的途径，",
            "也是景观的一部分，将游览体验和",
            "艺术欣赏完美结合。",
        ],
        picture: None,
    },
    IntroPage {
        lines: &[
            "在数字化时代，苏州园林正在经历创新性的转变。",
            "通过科技手段，这些古老的园林焕发新生。",
            "",
            "数字化保护不仅包括3D扫描建档、VR复原，",
            "还包括智能管理系统的应用。",
            "",
            "游客可以通过手机APP获取园林导览，",
            "体验AR增强现实技术带来的互动体验。",
            "",
            "这种传统与现代的结合，让人们能更好地理解和欣赏园林文化。",
        ],
        picture: Some("vr.jpg"),
    },
];

pub const PUZZLE_TITLE: &str = "拼图游戏";
pub const PUZZLE_INSTRUCTION: &str = "拖动拼图块完成拼图";
pub const PUZZLE_DONE: &str = "恭喜完成! 点击继续...";

pub const VIDEO_TITLE: &str = "数字园林简介";
pub const VIDEO_SUBTITLE: &str = "探索传统与科技的完美融合";
pub const VIDEO_SKIP: &str = "点击跳过 >>";

pub const THANKS_TITLE: &str = "感谢观看";
pub const THANKS_MESSAGES: [&str; 3] = [
    "感谢您观看数字园林",
    "让我们一起探索传统与科技的完美融合",
    "开启智慧园林新时代",
];
pub const THANKS_CONTINUE: &str = "点击任意处结束程序";
pub const THANKS_HINT: &str = "程序即将结束...";
