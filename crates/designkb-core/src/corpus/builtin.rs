//! Corpus data compiled into the binary

use super::partition::{Domain, Partition, Stack};

/// Raw TOML text of a built-in partition file
pub fn partition_source(partition: Partition) -> &'static str {
    match partition {
        Partition::Domain(domain) => match domain {
            Domain::Style => include_str!("../../data/domain/style.toml"),
            Domain::Typography => include_str!("../../data/domain/typography.toml"),
            Domain::Color => include_str!("../../data/domain/color.toml"),
            Domain::Product => include_str!("../../data/domain/product.toml"),
            Domain::Landing => include_str!("../../data/domain/landing.toml"),
            Domain::Chart => include_str!("../../data/domain/chart.toml"),
            Domain::Ux => include_str!("../../data/domain/ux.toml"),
            Domain::Prompt => include_str!("../../data/domain/prompt.toml"),
        },
        Partition::Stack(stack) => match stack {
            Stack::HtmlTailwind => include_str!("../../data/stack/html-tailwind.toml"),
            Stack::React => include_str!("../../data/stack/react.toml"),
            Stack::Nextjs => include_str!("../../data/stack/nextjs.toml"),
            Stack::Vue => include_str!("../../data/stack/vue.toml"),
            Stack::Nuxtjs => include_str!("../../data/stack/nuxtjs.toml"),
            Stack::NuxtUi => include_str!("../../data/stack/nuxt-ui.toml"),
            Stack::Svelte => include_str!("../../data/stack/svelte.toml"),
            Stack::Swiftui => include_str!("../../data/stack/swiftui.toml"),
            Stack::ReactNative => include_str!("../../data/stack/react-native.toml"),
            Stack::Flutter => include_str!("../../data/stack/flutter.toml"),
        },
    }
}
