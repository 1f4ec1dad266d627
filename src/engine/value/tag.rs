use std::fmt::Display;

/// Whether a value is a fixed quantity or originates from a random process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Determinism {
    /// A fixed, already known quantity.
    #[default]
    Fixed,
    /// A quantity produced by a non-deterministic process.
    Random,
}

impl Determinism {
    /// Combines the determinism of two operands.
    ///
    /// The result is [`Determinism::Random`] as soon as one side is random.
    /// Every binary operator derives its result determinism through this
    /// function.
    ///
    /// # Parameters
    /// - `other`: Determinism of the other operand.
    ///
    /// # Returns
    /// `Random` if either side is random, `Fixed` otherwise.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::value::tag::Determinism::{Fixed, Random};
    ///
    /// assert_eq!(Fixed.combine(Fixed), Fixed);
    /// assert_eq!(Fixed.combine(Random), Random);
    /// assert_eq!(Random.combine(Fixed), Random);
    /// ```
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Fixed, Self::Fixed) => Self::Fixed,
            _ => Self::Random,
        }
    }

    /// Maps a flag such as `is_random` to a determinism.
    ///
    /// # Parameters
    /// - `is_random`: Whether the quantity is random.
    #[must_use]
    pub const fn from_random_flag(is_random: bool) -> Self {
        if is_random { Self::Random } else { Self::Fixed }
    }

    /// Returns `true` for [`Determinism::Random`].
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Random)
    }
}

/// The four base categories a value can belong to, ignoring determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseType {
    /// Numeric scalar.
    Number,
    /// Text scalar.
    String,
    /// Logical scalar.
    Boolean,
    /// Ordered sequence of values.
    Array,
}

impl BaseType {
    /// All base categories.
    pub const ALL: [Self; 4] = [Self::Number, Self::String, Self::Boolean, Self::Array];

    /// Lower case name used in tag names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The tag of a value: its base category together with its determinism.
///
/// Every tag has a deterministic form and a `random-` prefixed form, which
/// gives eight tags in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `number`
    Number,
    /// `random-number`
    RandomNumber,
    /// `string`
    String,
    /// `random-string`
    RandomString,
    /// `boolean`
    Boolean,
    /// `random-boolean`
    RandomBoolean,
    /// `array`
    Array,
    /// `random-array`
    RandomArray,
}

impl Tag {
    /// All eight tags.
    pub const ALL: [Self; 8] = [Self::Number,
                                Self::RandomNumber,
                                Self::String,
                                Self::RandomString,
                                Self::Boolean,
                                Self::RandomBoolean,
                                Self::Array,
                                Self::RandomArray];

    /// Builds the tag for a base category and a determinism.
    ///
    /// # Parameters
    /// - `base`: Base category.
    /// - `determinism`: Fixed or random.
    ///
    /// # Returns
    /// The tag combining both.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::value::tag::{BaseType, Determinism, Tag};
    ///
    /// assert_eq!(Tag::new(BaseType::Array, Determinism::Random), Tag::RandomArray);
    /// assert_eq!(Tag::new(BaseType::Number, Determinism::Fixed), Tag::Number);
    /// ```
    #[must_use]
    pub const fn new(base: BaseType, determinism: Determinism) -> Self {
        use Determinism::{Fixed, Random};

        match (base, determinism) {
            (BaseType::Number, Fixed) => Self::Number,
            (BaseType::Number, Random) => Self::RandomNumber,
            (BaseType::String, Fixed) => Self::String,
            (BaseType::String, Random) => Self::RandomString,
            (BaseType::Boolean, Fixed) => Self::Boolean,
            (BaseType::Boolean, Random) => Self::RandomBoolean,
            (BaseType::Array, Fixed) => Self::Array,
            (BaseType::Array, Random) => Self::RandomArray,
        }
    }

    /// Returns the base category of the tag.
    #[must_use]
    pub const fn base(self) -> BaseType {
        match self {
            Self::Number | Self::RandomNumber => BaseType::Number,
            Self::String | Self::RandomString => BaseType::String,
            Self::Boolean | Self::RandomBoolean => BaseType::Boolean,
            Self::Array | Self::RandomArray => BaseType::Array,
        }
    }

    /// Returns the determinism of the tag.
    #[must_use]
    pub const fn determinism(self) -> Determinism {
        match self {
            Self::Number | Self::String | Self::Boolean | Self::Array => Determinism::Fixed,
            Self::RandomNumber | Self::RandomString | Self::RandomBoolean | Self::RandomArray => {
                Determinism::Random
            },
        }
    }

    /// Returns `true` if the tag carries the `random-` prefix.
    #[must_use]
    pub const fn is_random(self) -> bool {
        self.determinism().is_random()
    }

    /// Returns `true` for `number`.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number)
    }

    /// Returns `true` for `random-number`.
    #[must_use]
    pub const fn is_random_number(self) -> bool {
        matches!(self, Self::RandomNumber)
    }

    /// Returns `true` for `string`.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns `true` for `random-string`.
    #[must_use]
    pub const fn is_random_string(self) -> bool {
        matches!(self, Self::RandomString)
    }

    /// Returns `true` for `boolean`.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Returns `true` for `random-boolean`.
    #[must_use]
    pub const fn is_random_boolean(self) -> bool {
        matches!(self, Self::RandomBoolean)
    }

    /// Returns `true` for `array`.
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array)
    }

    /// Returns `true` for `random-array`.
    #[must_use]
    pub const fn is_random_array(self) -> bool {
        matches!(self, Self::RandomArray)
    }

    /// Returns `true` for `number` and `random-number`.
    #[must_use]
    pub const fn is_number_like(self) -> bool {
        self.is_number() || self.is_random_number()
    }

    /// Returns `true` for `string` and `random-string`.
    #[must_use]
    pub const fn is_string_like(self) -> bool {
        self.is_string() || self.is_random_string()
    }

    /// Returns `true` for `boolean` and `random-boolean`.
    #[must_use]
    pub const fn is_boolean_like(self) -> bool {
        self.is_boolean() || self.is_random_boolean()
    }

    /// Returns `true` for `array` and `random-array`.
    #[must_use]
    pub const fn is_array_like(self) -> bool {
        self.is_array() || self.is_random_array()
    }

    /// The tag name, e.g. `random-string`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::RandomNumber => "random-number",
            Self::String => "string",
            Self::RandomString => "random-string",
            Self::Boolean => "boolean",
            Self::RandomBoolean => "random-boolean",
            Self::Array => "array",
            Self::RandomArray => "random-array",
        }
    }

    /// Looks up a tag by its name.
    ///
    /// # Parameters
    /// - `name`: A tag name such as `"random-array"`.
    ///
    /// # Returns
    /// The tag, or `None` for an unknown name.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::value::tag::Tag;
    ///
    /// assert_eq!(Tag::from_name("random-boolean"), Some(Tag::RandomBoolean));
    /// assert_eq!(Tag::from_name("Random-Boolean"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
