//! Avatar Component
//!
//! Renders an image over an always-present initials fallback layer. When no
//! image is given or it fails to paint, the initials stay visible. An
//! optional presence dot sits on the bottom-right edge.

use gpui::{
    div, img, px, App, ImageSource, IntoElement, ParentElement, RenderOnce, Rgba, SharedString,
    Styled, Window,
};

use crate::helpers::string::initials;
use crate::theme::colors::DeskColors;
use crate::theme::status::presence_color;

/// Avatar size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl AvatarSize {
    fn diameter(&self) -> f32 {
        match self {
            AvatarSize::Small => 24.0,
            AvatarSize::Medium => 32.0,
            AvatarSize::Large => 40.0,
            AvatarSize::XLarge => 64.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            AvatarSize::Small => 10.0,
            AvatarSize::Medium => 13.0,
            AvatarSize::Large => 16.0,
            AvatarSize::XLarge => 24.0,
        }
    }
}

/// Avatar shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarShape {
    #[default]
    Circle,
    Rounded,
}

/// Fallback background palette, picked deterministically per name
const FALLBACK_COLORS: [u32; 6] = [
    0x0d9488, 0x3b82f6, 0x8b5cf6, 0xdb2777, 0xd97706, 0x059669,
];

fn fallback_color(name: &str) -> Rgba {
    let hash: u32 = name.bytes().fold(0u32, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as u32)
    });
    let index = (hash as usize) % FALLBACK_COLORS.len();
    gpui::rgb(FALLBACK_COLORS[index])
}

/// An avatar component
#[derive(IntoElement)]
pub struct Avatar {
    name: SharedString,
    image: Option<ImageSource>,
    size: AvatarSize,
    shape: AvatarShape,
    presence: Option<SharedString>,
}

impl Avatar {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            image: None,
            size: AvatarSize::Medium,
            shape: AvatarShape::Circle,
            presence: None,
        }
    }

    /// Set the image source rendered above the initials layer
    pub fn image(mut self, image: impl Into<ImageSource>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    /// Show a presence dot; unknown presence strings fall back to gray
    pub fn presence(mut self, presence: impl Into<SharedString>) -> Self {
        self.presence = Some(presence.into());
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let diameter = self.size.diameter();
        let initials_text = initials(&self.name);
        let bg = fallback_color(&self.name);

        let mut root = div().relative().size(px(diameter)).flex_none();

        // Fallback layer: always rendered underneath the image
        let mut fallback = div()
            .absolute()
            .inset_0()
            .bg(bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(DeskColors::text_light())
            .text_size(px(self.size.font_size()))
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(initials_text);

        fallback = match self.shape {
            AvatarShape::Circle => fallback.rounded_full(),
            AvatarShape::Rounded => fallback.rounded_md(),
        };
        root = root.child(fallback);

        if let Some(image) = self.image {
            let mut picture = img(image).absolute().inset_0().size(px(diameter));
            picture = match self.shape {
                AvatarShape::Circle => picture.rounded_full(),
                AvatarShape::Rounded => picture.rounded_md(),
            };
            root = root.child(picture);
        }

        if let Some(presence) = self.presence {
            let dot = (diameter * 0.3).max(8.0);
            root = root.child(
                div()
                    .absolute()
                    .bottom_0()
                    .right_0()
                    .size(px(dot))
                    .rounded_full()
                    .border_2()
                    .border_color(DeskColors::content_bg())
                    .bg(presence_color(&presence)),
            );
        }

        root
    }
}
