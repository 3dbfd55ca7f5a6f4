//! The operator catalog.
//!
//! Every expression operator is one tag of `VOperator`, with a fixed
//! printable name and a fixed set of arity classes it may be
//! constructed with. The legality table in [`VOperator::supports`] is
//! the single place the operator/arity contract is written down; the
//! node factory checks it once at construction so downstream passes
//! can rely on "operator X always has exactly N children" without
//! re-validating.

// ============================================================================
// Arity classes
// ============================================================================

/// The arity class of a factory call site.
///
/// Several tags are legal in more than one class (e.g. `Minus` as
/// unary negation and binary subtraction); such forms are distinct
/// operator identities told apart by the child count of the node that
/// was built, never by the tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Exactly one child
    Unary,
    /// Exactly two children
    Binary,
    /// Exactly three children
    Ternary,
    /// Any number of children, including zero
    Nary,
}

impl Arity {
    /// Lower-case name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Arity::Unary => "unary",
            Arity::Binary => "binary",
            Arity::Ternary => "ternary",
            Arity::Nary => "n-ary",
        }
    }
}

// ============================================================================
// Operator tags
// ============================================================================

/// An expression operator tag.
///
/// The two placeholder tags `MkConst` and `MkVar` exist only so leaf
/// nodes have a printable catalog name; they are not legal in any
/// arity class and the factory rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VOperator {
    /// Multiplication
    Star,
    Plus,
    Minus,
    /// Arithmetic shift left
    Asl,
    /// Arithmetic shift right
    Asr,
    /// Logical shift left
    Lsl,
    /// Logical shift right
    Lsr,
    Div,
    Pow,
    Mod,
    Gte,
    Lte,
    Gt,
    Lt,
    /// Logical negation `!`
    LNeg,
    /// Logical and `&&`
    LAnd,
    /// Logical or `||`
    LOr,
    /// Case equality `===`
    CEq,
    /// Logical equality `==`
    LEq,
    /// Case inequality `!==`
    CNeq,
    /// Logical inequality `!=`
    LNeq,
    /// Bitwise negation `~`
    BNeg,
    /// Bitwise and `&` (reduction-and in unary form)
    BAnd,
    /// Bitwise or `|` (reduction-or in unary form)
    BOr,
    /// Bitwise xor `^` (reduction-xor in unary form)
    BXor,
    /// Bitwise xnor, written `^~` or `~^`
    BEqu,
    BNand,
    BNor,
    /// Bit/element select `a[i]`; `a[i][j]` nests as
    /// `Index(Index(a, i), j)`
    Index,
    /// Part select `a[hi:lo]`, ternary
    RangeIndex,
    /// Indexed part select `a[base+:w]`, ternary
    IdxPartSelPlus,
    /// Indexed part select `a[base-:w]`, ternary
    IdxPartSelMinus,
    /// Store notation `a:<i>:v`; accepted by the ternary factory but
    /// no consumer assigns it semantics yet
    StoreOp,
    At,
    /// Conditional select `c ? t : f`
    Ternary,
    /// Function application `f(a, b, ...)`, n-ary over the arguments
    FunctionApp,
    /// Concatenation `{a, b, ...}`
    Concat,
    /// Replication `{n{a}}`
    Repeat,
    /// Placeholder tag for constant leaves
    MkConst,
    /// Placeholder tag for variable leaves
    MkVar,
}

impl VOperator {
    /// Every tag in catalog order, for exhaustive audits.
    pub const ALL: &'static [VOperator] = &[
        VOperator::Star,
        VOperator::Plus,
        VOperator::Minus,
        VOperator::Asl,
        VOperator::Asr,
        VOperator::Lsl,
        VOperator::Lsr,
        VOperator::Div,
        VOperator::Pow,
        VOperator::Mod,
        VOperator::Gte,
        VOperator::Lte,
        VOperator::Gt,
        VOperator::Lt,
        VOperator::LNeg,
        VOperator::LAnd,
        VOperator::LOr,
        VOperator::CEq,
        VOperator::LEq,
        VOperator::CNeq,
        VOperator::LNeq,
        VOperator::BNeg,
        VOperator::BAnd,
        VOperator::BOr,
        VOperator::BXor,
        VOperator::BEqu,
        VOperator::BNand,
        VOperator::BNor,
        VOperator::Index,
        VOperator::RangeIndex,
        VOperator::IdxPartSelPlus,
        VOperator::IdxPartSelMinus,
        VOperator::StoreOp,
        VOperator::At,
        VOperator::Ternary,
        VOperator::FunctionApp,
        VOperator::Concat,
        VOperator::Repeat,
        VOperator::MkConst,
        VOperator::MkVar,
    ];

    /// The printable catalog name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            VOperator::Star => "STAR",
            VOperator::Plus => "PLUS",
            VOperator::Minus => "MINUS",
            VOperator::Asl => "ASL",
            VOperator::Asr => "ASR",
            VOperator::Lsl => "LSL",
            VOperator::Lsr => "LSR",
            VOperator::Div => "DIV",
            VOperator::Pow => "POW",
            VOperator::Mod => "MOD",
            VOperator::Gte => "GTE",
            VOperator::Lte => "LTE",
            VOperator::Gt => "GT",
            VOperator::Lt => "LT",
            VOperator::LNeg => "L_NEG",
            VOperator::LAnd => "L_AND",
            VOperator::LOr => "L_OR",
            VOperator::CEq => "C_EQ",
            VOperator::LEq => "L_EQ",
            VOperator::CNeq => "C_NEQ",
            VOperator::LNeq => "L_NEQ",
            VOperator::BNeg => "B_NEG",
            VOperator::BAnd => "B_AND",
            VOperator::BOr => "B_OR",
            VOperator::BXor => "B_XOR",
            VOperator::BEqu => "B_EQU",
            VOperator::BNand => "B_NAND",
            VOperator::BNor => "B_NOR",
            VOperator::Index => "INDEX",
            VOperator::RangeIndex => "RANGE_INDEX",
            VOperator::IdxPartSelPlus => "IDX_PRT_SEL_PLUS",
            VOperator::IdxPartSelMinus => "IDX_PRT_SEL_MINUS",
            VOperator::StoreOp => "STORE_OP",
            VOperator::At => "AT",
            VOperator::Ternary => "TERNARY",
            VOperator::FunctionApp => "FUNCTION_APP",
            VOperator::Concat => "CONCAT",
            VOperator::Repeat => "REPEAT",
            VOperator::MkConst => "MK_CONST",
            VOperator::MkVar => "MK_VAR",
        }
    }

    /// Whether this is a leaf placeholder tag (`MkConst`/`MkVar`).
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, VOperator::MkConst | VOperator::MkVar)
    }

    /// The operator/arity legality table.
    ///
    /// Returns whether a node with this tag may be built through the
    /// factory for `arity`. The table is total over all tags; the
    /// placeholders support no class at all.
    #[must_use]
    pub const fn supports(self, arity: Arity) -> bool {
        match arity {
            Arity::Unary => matches!(
                self,
                VOperator::Plus
                    | VOperator::Minus
                    | VOperator::LNeg
                    | VOperator::BNeg
                    | VOperator::BAnd
                    | VOperator::BNand
                    | VOperator::BOr
                    | VOperator::BNor
                    | VOperator::BXor
                    | VOperator::BEqu
            ),
            Arity::Binary => matches!(
                self,
                VOperator::Repeat
                    | VOperator::Star
                    | VOperator::Plus
                    | VOperator::Minus
                    | VOperator::Asl
                    | VOperator::Asr
                    | VOperator::Lsl
                    | VOperator::Lsr
                    | VOperator::Div
                    | VOperator::Pow
                    | VOperator::Mod
                    | VOperator::Gte
                    | VOperator::Lte
                    | VOperator::Gt
                    | VOperator::Lt
                    | VOperator::LNeg
                    | VOperator::LAnd
                    | VOperator::LOr
                    | VOperator::CEq
                    | VOperator::LEq
                    | VOperator::CNeq
                    | VOperator::LNeq
                    | VOperator::BNeg
                    | VOperator::BAnd
                    | VOperator::BOr
                    | VOperator::BXor
                    | VOperator::BEqu
                    | VOperator::BNand
                    | VOperator::BNor
                    | VOperator::Index
                    | VOperator::At
            ),
            Arity::Ternary => matches!(
                self,
                VOperator::Ternary
                    | VOperator::RangeIndex
                    | VOperator::IdxPartSelPlus
                    | VOperator::IdxPartSelMinus
                    | VOperator::StoreOp
            ),
            Arity::Nary => matches!(self, VOperator::FunctionApp | VOperator::Concat),
        }
    }
}
