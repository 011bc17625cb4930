use std::fs;
use skia_safe::{Data, FontMgr};
use skia_safe::textlayout::{FontCollection, TypefaceFontProvider};

use crate::core::AssetManager;

/// Family alias every registered CJK face is filed under.
pub const FAMILY: &str = "jiangnan";

#[cfg(target_os = "macos")]
const SYSTEM_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
];

#[cfg(target_os = "windows")]
const SYSTEM_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\simhei.ttf",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

/// Fonts bundled with the assets win; otherwise the first system candidate
/// that parses. Skia's default manager stays as the fallback.
pub fn build_collection(assets: &AssetManager) -> FontCollection {
    let mut provider = TypefaceFontProvider::new();
    let mut registered = assets.register_fonts_to(&mut provider, FAMILY);

    if registered == 0 {
        for path in SYSTEM_CANDIDATES {
            let Ok(bytes) = fs::read(path) else { continue };
            if let Some(typeface) = FontMgr::default().new_from_data(&Data::new_copy(&bytes), None) {
                provider.register_typeface(typeface, Some(FAMILY));
                log::info!("Using system font {}", path);
                registered += 1;
                break;
            }
        }
    }
    if registered == 0 {
        log::warn!("No CJK font found, text falls back to the default font manager");
    }

    let mut font_collection = FontCollection::new();
    font_collection.set_asset_font_manager(Some(provider.into()));
    font_collection.set_default_font_manager(FontMgr::default(), None);
    font_collection
}
