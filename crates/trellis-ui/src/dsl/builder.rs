use trellis_dsl::line::depth_of;
use trellis_dsl::text::dedent;
use trellis_dsl::{INDENT_STEP, LogicalLine, ParsedLine, STRETCH, parse_line};

use crate::dsl::composer::{Child, TabCounter, attach};
use crate::dsl::error::{BuildError, BuildErrorKind, Provenance, RegistryError};
use crate::dsl::factory::Factory;
use crate::dsl::hierarchy::Hierarchy;
use crate::dsl::registry::{PATH_SEPARATOR, Registry};
use crate::toolkit::{ObjectFinder, QtToolkit, Toolkit, UnsupportedFinder};
use crate::widget::ObjectRef;

/// Origin label for input that did not come from a file.
pub const PROVIDED_TEXT: &str = "provided text";

// ── Builder ───────────────────────────────────────────────────────────────

/// Builds a [`Hierarchy`] from DSL text against a given toolkit.
///
/// ```rust,ignore
/// let mut pool = ObjectPool::new();
/// pool.insert("main", &window);
///
/// let hierarchy = Builder::new(&QtToolkit)
///     .finder(&pool)
///     .build(include_str!("../ui/main.tl"), "main.tl")?;
/// ```
pub struct Builder<'a> {
    toolkit: &'a dyn Toolkit,
    finder: &'a dyn ObjectFinder,
}

impl<'a> Builder<'a> {
    pub fn new(toolkit: &'a dyn Toolkit) -> Self {
        Self { toolkit, finder: &UnsupportedFinder }
    }

    /// Where `?Class` lines look for existing objects.
    pub fn finder(mut self, finder: &'a dyn ObjectFinder) -> Self {
        self.finder = finder;
        self
    }

    /// Build every line of `source`. `provenance` names the input in errors
    /// (a file path, or [`PROVIDED_TEXT`]).
    pub fn build(&self, source: &str, provenance: &str) -> Result<Hierarchy, BuildError> {
        let mut pass = Pass {
            factory: Factory::new(self.toolkit, self.finder),
            registry: Registry::new(),
            tabs: TabCounter::new(),
            stretch_depth: None,
            origin: provenance,
        };

        let originals: Vec<&str> = source.lines().collect();
        for (i, raw) in dedent(source).into_iter().enumerate() {
            let number = i + 1;
            let text = originals.get(i).copied().unwrap_or(raw).trim();
            pass.line(number, raw)
                .map_err(|kind| BuildError::at(number, text, provenance, kind))?;
        }

        let count = pass.registry.len();
        let hierarchy = Hierarchy::new(pass.registry)
            .ok_or_else(|| BuildError::whole_input(provenance, BuildErrorKind::EmptyInput))?;
        log::info!("built {count} items from {provenance}");
        Ok(hierarchy)
    }
}

/// Build with the built-in toolkit and no way to find existing objects.
pub fn build(source: &str, provenance: &str) -> Result<Hierarchy, BuildError> {
    Builder::new(&QtToolkit).build(source, provenance)
}

// ── Pass ──────────────────────────────────────────────────────────────────

/// State of one build.
struct Pass<'a> {
    factory: Factory<'a>,
    registry: Registry,
    tabs: TabCounter,
    /// Depth of the last line if it was a stretch.
    stretch_depth: Option<usize>,
    origin: &'a str,
}

impl Pass<'_> {
    fn line(&mut self, number: usize, raw: &str) -> Result<(), BuildErrorKind> {
        match parse_line(raw)? {
            ParsedLine::Blank | ParsedLine::Comment => Ok(()),
            ParsedLine::Stretch { indent } => self.stretch(depth_of(indent)),
            ParsedLine::Item(line) => self.item(number, &line),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), BuildErrorKind> {
        if self.stretch_depth.is_some_and(|d| depth > d) {
            return Err(BuildErrorKind::StretchWithChildren);
        }
        let current = self.registry.current_depth();
        if depth > current + 1 {
            return Err(BuildErrorKind::SkippedLevel { depth, current, step: INDENT_STEP });
        }
        Ok(())
    }

    fn parent_at(&self, depth: usize) -> Result<(ObjectRef, String), RegistryError> {
        self.registry
            .most_recently_added_at_depth(depth)
            .ok_or(RegistryError::NoParent { depth })
    }

    fn stretch(&mut self, depth: usize) -> Result<(), BuildErrorKind> {
        self.check_depth(depth)?;
        if depth == 1 {
            return Err(BuildErrorKind::StretchAtTopLevel);
        }
        let (parent, _) = self.parent_at(depth - 1)?;
        attach(Child::Stretch, STRETCH, &parent, &mut self.tabs)?;
        self.stretch_depth = Some(depth);
        Ok(())
    }

    fn item(&mut self, number: usize, line: &LogicalLine) -> Result<(), BuildErrorKind> {
        let depth = line.depth();
        self.check_depth(depth)?;
        self.stretch_depth = None;

        let object =
            self.factory.make(&line.name, &line.type_word, line.literal_text.as_deref())?;
        let provenance = Provenance::new(number, self.origin);

        if depth == 1 {
            self.registry.register_top_level(&object, &line.name, provenance)?;
            return Ok(());
        }

        let (parent, parent_path) = self.parent_at(depth - 1)?;
        // Refuse a taken name before the parent is touched.
        let path = format!("{parent_path}{PATH_SEPARATOR}{}", line.name);
        self.registry.check_available(&object, &line.name, &path, &provenance)?;
        attach(Child::Object(&object), &line.name, &parent, &mut self.tabs)?;
        self.registry.register_child(&object, &parent_path, &line.name, provenance)?;
        Ok(())
    }
}
