use std::cmp::Ordering;

use trellis_dsl::{Keyword, TypeWord};

use crate::dsl::error::FactoryError;
use crate::dsl::probe::apply_text;
use crate::toolkit::{ConstructError, ObjectFinder, Toolkit};
use crate::widget::{Kind, ObjectRef};

/// How many near misses an unknown-type error offers.
pub const SUGGESTION_LIMIT: usize = 6;

/// Turns one line's type-word into a primitive, new or existing.
pub struct Factory<'a> {
    toolkit: &'a dyn Toolkit,
    finder: &'a dyn ObjectFinder,
}

impl<'a> Factory<'a> {
    pub fn new(toolkit: &'a dyn Toolkit, finder: &'a dyn ObjectFinder) -> Self {
        Self { toolkit, finder }
    }

    /// Produce the object for the line `name type_word(literal_text)`.
    ///
    /// Keywords and class names are instantiated; `?Class` looks up the one
    /// existing object of that class referenced as `name`. Literal text, if
    /// any, is applied afterwards.
    pub fn make(
        &self,
        name: &str,
        type_word: &TypeWord,
        literal_text: Option<&str>,
    ) -> Result<ObjectRef, FactoryError> {
        let obj = match type_word {
            TypeWord::Keyword(k) => self.instantiate(k.class_name())?,
            TypeWord::ToolkitClass(class) => self.instantiate(class)?,
            TypeWord::FindExisting(class) => self.find(class, name)?,
        };
        if let Some(text) = literal_text {
            apply_text(&obj, text)?;
        }
        Ok(obj)
    }

    fn instantiate(&self, class: &str) -> Result<ObjectRef, FactoryError> {
        let obj = self.toolkit.construct(class).map_err(|e| match e {
            ConstructError::Unknown(_) => FactoryError::UnknownType {
                class: class.to_string(),
                suggestions: self.suggest(class),
            },
            ConstructError::Failed(reason) => {
                FactoryError::Instantiation { class: class.to_string(), reason }
            }
        })?;
        if obj.borrow().kind() == Kind::Other {
            return Err(FactoryError::WrongKind { class: class.to_string() });
        }
        Ok(obj)
    }

    fn find(&self, class: &str, name: &str) -> Result<ObjectRef, FactoryError> {
        if !self.finder.is_supported() {
            return Err(FactoryError::FindUnsupported { class: class.to_string() });
        }
        let mut found = self.finder.find(class, name);
        match found.len() {
            0 => Err(FactoryError::NotFound { class: class.to_string(), name: name.to_string() }),
            1 => Ok(found.remove(0)),
            count => Err(FactoryError::Ambiguous {
                class: class.to_string(),
                name: name.to_string(),
                count,
            }),
        }
    }

    /// The known type-words closest to `word`, best first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let wanted = word.to_lowercase();
        let mut scored: Vec<(f64, &str)> = Keyword::ALL
            .iter()
            .map(|k| k.word())
            .chain(self.toolkit.class_names())
            .map(|candidate| {
                (strsim::normalized_levenshtein(&wanted, &candidate.to_lowercase()), candidate)
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal).then(a.1.cmp(b.1)));
        scored.into_iter().take(SUGGESTION_LIMIT).map(|(_, c)| c.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::toolkit::{ObjectPool, QtToolkit, UnsupportedFinder};
    use crate::widget::class_of;

    fn make(word: &str, text: Option<&str>) -> Result<ObjectRef, FactoryError> {
        let tw = TypeWord::parse(word).unwrap();
        Factory::new(&QtToolkit, &UnsupportedFinder).make("item", &tw, text)
    }

    #[test]
    fn keywords_map_to_canonical_classes() {
        for k in Keyword::ALL {
            let obj = make(k.word(), None).unwrap();
            assert_eq!(class_of(&obj), k.class_name());
        }
    }

    #[test]
    fn class_names_are_taken_literally() {
        assert_eq!(class_of(&make("QCheckBox", None).unwrap()), "QCheckBox");
    }

    #[test]
    fn literal_text_is_applied() {
        let obj = make("QPushButton", Some("OK")).unwrap();
        assert_eq!(obj.borrow().text(), Some("OK"));
    }

    #[test]
    fn text_on_a_layout_fails() {
        assert!(matches!(make("HBOX", Some("x")), Err(FactoryError::CannotSetText(_))));
    }

    #[test]
    fn unknown_class_suggests_near_misses() {
        let Err(FactoryError::UnknownType { suggestions, .. }) = make("qlable", None) else {
            panic!("expected an unknown-type error");
        };
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions[0], "QLabel");
    }

    #[test]
    fn abstract_class_fails_to_instantiate() {
        assert!(matches!(make("QLayout", None), Err(FactoryError::Instantiation { .. })));
    }

    #[test]
    fn non_visual_objects_are_rejected() {
        assert_eq!(
            make("QTimer", None).unwrap_err(),
            FactoryError::WrongKind { class: "QTimer".into() }
        );
    }

    #[test]
    fn find_without_a_finder() {
        assert_eq!(
            make("?QMainWindow", None).unwrap_err(),
            FactoryError::FindUnsupported { class: "QMainWindow".into() }
        );
    }

    #[test]
    fn find_through_a_pool() {
        let window = QtToolkit.construct("QMainWindow").unwrap();
        let mut pool = ObjectPool::new();
        pool.insert("main", &window);
        let factory = Factory::new(&QtToolkit, &pool);
        let tw = TypeWord::parse("?QMainWindow").unwrap();
        let found = factory.make("main", &tw, None).unwrap();
        assert!(Rc::ptr_eq(&found, &window));
        assert!(matches!(
            factory.make("other", &tw, None),
            Err(FactoryError::NotFound { .. })
        ));
    }

    #[test]
    fn find_with_two_candidates_is_ambiguous() {
        let mut pool = ObjectPool::new();
        pool.insert("status", &QtToolkit.construct("QLabel").unwrap());
        pool.insert("status", &QtToolkit.construct("QLabel").unwrap());
        let factory = Factory::new(&QtToolkit, &pool);
        let tw = TypeWord::parse("?QLabel").unwrap();
        assert!(matches!(
            factory.make("status", &tw, None),
            Err(FactoryError::Ambiguous { count: 2, .. })
        ));
    }
}
