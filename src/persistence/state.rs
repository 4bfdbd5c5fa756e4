//! Portfolio state accessor
//!
//! Every operation is a read-modify-write of whole records. Records that are
//! missing or unparsable are replaced by defaults and written back on load.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::store::KeyValueStore;
use crate::cards::{Card, CardUpdate, default_cards, normalize_len};
use crate::error::{PortfolioError, Result};
use crate::profile::Profile;
use crate::settings::EditorConfig;

/// Snapshot of both stored records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioState {
    pub profile: Profile,
    pub cards: Vec<Card>,
}

/// Reads and writes the profile and card records through a key-value store
#[derive(Debug)]
pub struct PortfolioStore<S: KeyValueStore> {
    store: S,
    config: EditorConfig,
}

impl<S: KeyValueStore> PortfolioStore<S> {
    pub fn new(store: S, config: EditorConfig) -> Self {
        Self { store, config }
    }

    /// Store with the default configuration
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, EditorConfig::default())
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// Load both records, healing absent or corrupt ones
    pub fn load_state(&self) -> Result<PortfolioState> {
        let cards = self.load_cards()?;
        let profile = self.load_profile()?;
        Ok(PortfolioState { profile, cards })
    }

    /// Make sure both records exist in storage
    pub fn ensure_defaults(&self) -> Result<PortfolioState> {
        self.load_state()
    }

    /// Overwrite the card collection
    pub fn save_cards(&self, cards: &[Card]) -> Result<()> {
        self.write(&self.config.cards_key, cards)
    }

    /// Overwrite the profile
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.write(&self.config.profile_key, profile)
    }

    /// Apply a partial update to the card at `index` and persist the collection.
    /// Returns the card as stored.
    pub fn apply_card_save(&self, index: usize, update: &CardUpdate) -> Result<Card> {
        let mut cards = self.load_cards()?;
        let len = cards.len();
        let card = cards
            .get_mut(index)
            .ok_or(PortfolioError::CardIndexOutOfRange { index, len })?;
        card.apply(update);
        let saved = card.clone();

        self.save_cards(&cards)?;
        log::info!("Card {} saved", index + 1);
        Ok(saved)
    }

    /// Reset title, link and image of one card
    pub fn clear_card(&self, index: usize) -> Result<Card> {
        self.apply_card_save(index, &CardUpdate::cleared())
    }

    /// Clear one card only if `confirm` approves; declining writes nothing.
    /// Returns the cleared card, or `None` when declined.
    pub fn clear_card_if(
        &self,
        index: usize,
        confirm: impl FnOnce() -> bool,
    ) -> Result<Option<Card>> {
        if !confirm() {
            log::info!("Clearing card {} cancelled", index + 1);
            return Ok(None);
        }
        self.clear_card(index).map(Some)
    }

    /// Store a new profile photo, leaving other profile fields intact
    pub fn set_profile_photo(&self, data_url: impl Into<String>) -> Result<Profile> {
        let mut profile = self.load_profile()?;
        profile.set_photo(data_url);
        self.save_profile(&profile)?;
        log::info!("Profile photo saved");
        Ok(profile)
    }

    fn load_cards(&self) -> Result<Vec<Card>> {
        let count = self.config.card_count;
        match self.read::<Vec<Card>>(&self.config.cards_key)? {
            Some(mut cards) => {
                let len = cards.len();
                if normalize_len(&mut cards, count) {
                    log::warn!("Stored {} cards, expected {}; normalizing", len, count);
                    self.save_cards(&cards)?;
                }
                Ok(cards)
            }
            None => {
                let cards = default_cards(count);
                self.save_cards(&cards)?;
                Ok(cards)
            }
        }
    }

    fn load_profile(&self) -> Result<Profile> {
        match self.read::<Profile>(&self.config.profile_key)? {
            Some(profile) => Ok(profile),
            None => {
                let profile = self.config.default_profile.clone();
                self.save_profile(&profile)?;
                Ok(profile)
            }
        }
    }

    /// `Ok(None)` for absent or unparsable records
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(json) = self.store.get(key)? else {
            log::info!("No record under '{}', writing defaults", key);
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("Corrupt record under '{}' ({}), writing defaults", key, e);
                Ok(None)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ImageUpdate;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    fn portfolio() -> PortfolioStore<MemoryStore> {
        PortfolioStore::with_defaults(MemoryStore::new())
    }

    fn sample_card(n: usize) -> Card {
        Card {
            title: format!("Project {}", n),
            img_data_url: format!("https://img.example/{}.png", n),
            link: format!("https://site.example/{}", n),
        }
    }

    fn seed_cards(p: &PortfolioStore<MemoryStore>) -> Vec<Card> {
        let cards: Vec<Card> = (0..NUM_CARDS).map(sample_card).collect();
        p.save_cards(&cards).unwrap();
        cards
    }

    #[test]
    fn test_empty_storage_writes_defaults() {
        let p = portfolio();
        let state = p.load_state().unwrap();

        assert_eq!(state.profile, Profile::default());
        assert_eq!(state.cards.len(), NUM_CARDS);
        assert!(state.cards.iter().all(Card::is_empty));

        let raw_cards = p.store().get(CARDS_KEY).unwrap().unwrap();
        let stored: Vec<Card> = serde_json::from_str(&raw_cards).unwrap();
        assert_eq!(stored, state.cards);
        let raw_profile = p.store().get(PROFILE_KEY).unwrap().unwrap();
        let stored: Profile = serde_json::from_str(&raw_profile).unwrap();
        assert_eq!(stored, state.profile);
    }

    #[test]
    fn test_corrupt_records_heal() {
        let p = portfolio();
        p.store().set(CARDS_KEY, "[{oops").unwrap();
        p.store().set(PROFILE_KEY, "null").unwrap();

        let state = p.load_state().unwrap();
        assert_eq!(state.cards, default_cards(NUM_CARDS));
        assert_eq!(state.profile, Profile::default());

        let raw = p.store().get(PROFILE_KEY).unwrap().unwrap();
        assert_ne!(raw, "null");
    }

    #[test]
    fn test_wrongly_typed_field_heals_record() {
        let p = portfolio();
        let custom = Profile {
            curso: "5A".to_string(),
            ..Default::default()
        };
        p.save_profile(&custom).unwrap();
        p.store().set(PROFILE_KEY, r#"{"name":5,"curso":"5A"}"#).unwrap();

        let state = p.load_state().unwrap();
        assert_eq!(state.profile, Profile::default());
        let raw = p.store().get(PROFILE_KEY).unwrap().unwrap();
        let stored: Profile = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, Profile::default());
    }

    #[test]
    fn test_clear_declined_writes_nothing() {
        let p = portfolio();
        seed_cards(&p);
        let raw_before = p.store().get(CARDS_KEY).unwrap().unwrap();

        let cleared = p.clear_card_if(1, || false).unwrap();
        assert!(cleared.is_none());
        assert_eq!(p.store().get(CARDS_KEY).unwrap().unwrap(), raw_before);
    }

    #[test]
    fn test_clear_confirmed_empties_one_card() {
        let p = portfolio();
        let before = seed_cards(&p);

        let cleared = p.clear_card_if(1, || true).unwrap();
        assert_eq!(cleared, Some(Card::empty()));

        let after = p.load_state().unwrap().cards;
        assert_eq!(after[0], before[0]);
        assert!(after[1].is_empty());
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_wrong_length_is_normalized() {
        let p = portfolio();
        p.save_cards(&[sample_card(0)]).unwrap();

        let state = p.load_state().unwrap();
        assert_eq!(state.cards.len(), NUM_CARDS);
        assert_eq!(state.cards[0], sample_card(0));

        let raw = p.store().get(CARDS_KEY).unwrap().unwrap();
        let stored: Vec<Card> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), NUM_CARDS);
    }

    #[test]
    fn test_custom_card_count() {
        let p = PortfolioStore::new(MemoryStore::new(), EditorConfig::with_card_count(5));
        assert_eq!(p.load_state().unwrap().cards.len(), 5);
    }

    #[test]
    fn test_save_without_image_change_keeps_image() {
        let p = portfolio();
        let before = seed_cards(&p);

        let saved = p
            .apply_card_save(
                1,
                &CardUpdate {
                    title: Some("T".to_string()),
                    link: Some("L".to_string()),
                    image: ImageUpdate::NoChange,
                },
            )
            .unwrap();
        assert_eq!(saved.title, "T");
        assert_eq!(saved.link, "L");
        assert_eq!(saved.img_data_url, before[1].img_data_url);
        assert_eq!(p.load_state().unwrap().cards[1], saved);
    }

    #[test]
    fn test_keep_retains_image() {
        let p = portfolio();
        let before = seed_cards(&p);

        p.apply_card_save(
            0,
            &CardUpdate {
                title: Some("New".to_string()),
                link: Some(String::new()),
                image: ImageUpdate::Keep,
            },
        )
        .unwrap();

        let card = &p.load_state().unwrap().cards[0];
        assert_eq!(card.title, "New");
        assert_eq!(card.link, "");
        assert_eq!(card.img_data_url, before[0].img_data_url);
    }

    #[test]
    fn test_clear_image_only() {
        let p = portfolio();
        let before = seed_cards(&p);

        p.apply_card_save(
            2,
            &CardUpdate {
                image: ImageUpdate::Clear,
                ..Default::default()
            },
        )
        .unwrap();

        let card = &p.load_state().unwrap().cards[2];
        assert_eq!(card.img_data_url, "");
        assert_eq!(card.title, before[2].title);
        assert_eq!(card.link, before[2].link);
    }

    #[test]
    fn test_out_of_range_index() {
        let p = portfolio();
        let before = seed_cards(&p);

        let err = p.clear_card(NUM_CARDS).unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::CardIndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(p.load_state().unwrap().cards, before);
    }

    #[test]
    fn test_profile_photo_only_touches_photo() {
        let p = portfolio();
        let profile = Profile {
            curso: "4to B".to_string(),
            ..Default::default()
        };
        p.save_profile(&profile).unwrap();

        let updated = p.set_profile_photo("data:image/png;base64,AAAA").unwrap();
        assert_eq!(updated.photo_data_url, "data:image/png;base64,AAAA");
        assert_eq!(
            Profile {
                photo_data_url: String::new(),
                ..updated.clone()
            },
            profile
        );
        assert_eq!(p.load_state().unwrap().profile, updated);
    }

    fn arb_card() -> impl Strategy<Value = Card> {
        (".{0,16}", ".{0,32}", ".{0,16}").prop_map(|(title, img_data_url, link)| Card {
            title,
            img_data_url,
            link,
        })
    }

    fn arb_profile() -> impl Strategy<Value = Profile> {
        (".{0,16}", ".{0,8}", ".{0,16}", ".{0,8}", ".{0,32}").prop_map(
            |(name, legajo, materia, curso, photo_data_url)| Profile {
                name,
                legajo,
                materia,
                curso,
                photo_data_url,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_records_round_trip(
            profile in arb_profile(),
            cards in proptest::collection::vec(arb_card(), NUM_CARDS),
        ) {
            let p = portfolio();
            p.save_profile(&profile).unwrap();
            p.save_cards(&cards).unwrap();

            let state = p.load_state().unwrap();
            prop_assert_eq!(state.profile, profile);
            prop_assert_eq!(state.cards, cards);
        }

        #[test]
        fn prop_clear_leaves_other_cards(
            cards in proptest::collection::vec(arb_card(), NUM_CARDS),
            index in 0..NUM_CARDS,
        ) {
            let p = portfolio();
            p.save_cards(&cards).unwrap();
            p.clear_card(index).unwrap();

            let after = p.load_state().unwrap().cards;
            prop_assert_eq!(after.len(), NUM_CARDS);
            for (i, card) in after.iter().enumerate() {
                if i == index {
                    prop_assert!(card.is_empty());
                } else {
                    prop_assert_eq!(card, &cards[i]);
                }
            }
        }
    }
}
