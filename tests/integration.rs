// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior tests over the public component API.

use iced_gallery::app::config::{self, Config};
use iced_gallery::catalog::{Catalog, CATALOG_LEN};
use iced_gallery::i18n::I18n;
use iced_gallery::media::ImageData;
use iced_gallery::ui::gallery;
use iced_gallery::ui::lightbox;
use std::path::Path;
use tempfile::tempdir;

fn test_image() -> ImageData {
    ImageData::from_rgba(2, 2, vec![0u8; 16])
}

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn catalog_and_lightbox_share_wraparound_arithmetic() {
    let catalog = Catalog::new(Path::new("/assets"));
    let mut viewer = lightbox::State::new(catalog.len());

    viewer.handle(lightbox::Message::Open(0));
    viewer.handle(lightbox::Message::Previous);
    assert_eq!(
        viewer.selected_index(),
        Some(catalog.wrap_previous(0)),
        "lightbox and catalog must agree on wrap-around"
    );
}

#[test]
fn full_viewing_scenario_from_the_grid() {
    // N=8: click thumbnail 3, ArrowRight 8 times cycles back to 3, Escape closes
    let mut grid = gallery::State::new(CATALOG_LEN);
    let mut viewer = lightbox::State::new(CATALOG_LEN);

    let effect = grid.handle(gallery::Message::CellPressed(3));
    let gallery::Effect::OpenLightbox(index) = effect else {
        panic!("expected the grid click to open the lightbox");
    };
    viewer.handle(lightbox::Message::Open(index));
    assert_eq!(viewer.selected_index(), Some(3));
    assert!(!viewer.image_loaded());

    for expected in [4, 5, 6, 7, 0, 1, 2, 3] {
        viewer.handle(lightbox::Message::Next);
        assert_eq!(viewer.selected_index(), Some(expected));
        assert!(!viewer.image_loaded());
    }

    viewer.handle(lightbox::Message::Close);
    assert!(!viewer.is_open());
    assert!(!viewer.image_loaded());
}

#[test]
fn backdrop_and_content_clicks_behave_differently() {
    let mut viewer = lightbox::State::new(CATALOG_LEN);
    viewer.handle(lightbox::Message::Open(2));

    viewer.handle(lightbox::Message::ContentPressed);
    assert_eq!(viewer.selected_index(), Some(2), "content click must not close");

    viewer.handle(lightbox::Message::BackdropPressed);
    assert!(!viewer.is_open(), "backdrop click must close");
}

#[test]
fn grid_load_flags_are_monotone_under_arbitrary_messages() {
    let mut grid = gallery::State::new(CATALOG_LEN);

    grid.handle(gallery::Message::ThumbnailLoaded {
        index: 5,
        result: Ok(test_image()),
    });
    assert!(grid.load_flags().is_loaded(5));

    // Late duplicate failure for the same cell must not revert the flag
    grid.handle(gallery::Message::ThumbnailLoaded {
        index: 5,
        result: Err(iced_gallery::error::Error::Io("late".into())),
    });
    grid.handle(gallery::Message::AnimationTick);

    assert!(grid.load_flags().is_loaded(5));
    assert_eq!(grid.load_flags().len(), CATALOG_LEN);
}

#[test]
fn reopening_after_a_loaded_view_starts_unloaded_again() {
    let mut viewer = lightbox::State::new(CATALOG_LEN);

    viewer.handle(lightbox::Message::Open(1));
    viewer.handle(lightbox::Message::ImageLoaded {
        index: 1,
        result: Ok(test_image()),
    });
    assert!(viewer.image_loaded());

    viewer.handle(lightbox::Message::Close);
    viewer.handle(lightbox::Message::Open(1));
    assert!(
        !viewer.image_loaded(),
        "reopening the same index must reset the loaded flag"
    );
}
