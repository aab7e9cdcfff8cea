//! The SQL keyword enumeration.
//!
//! Variants are declared in catalog order. That order is observable through
//! [`Keyword::VARIANTS`] and the registry's keyword list, so new words must be
//! inserted where they belong rather than appended.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Keywords whose textual form differs from their declared name.
///
/// `END-EXEC` cannot be spelled as a Rust identifier, so the variant is
/// declared as `END_EXEC` and renamed here.
pub const RENAMED_KEYWORDS: &[(Keyword, &str)] = &[(Keyword::EndExec, "END-EXEC")];

macro_rules! define_keywords {
    ($($variant:ident => $name:literal,)+) => {
        /// A reserved SQL word.
        ///
        /// `Undefined` is the sentinel for "not a keyword" and is excluded
        /// from [`Keyword::VARIANTS`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
            /// Not a keyword.
            Undefined,
        }

        impl Keyword {
            /// Every keyword except [`Keyword::Undefined`], in declaration order.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the declared symbol name, before any rename.
            #[must_use]
            pub const fn declared_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::Undefined => "UNDEFINED",
                }
            }
        }
    };
}

define_keywords! {
    Abort => "ABORT",
    Abs => "ABS",
    Absolute => "ABSOLUTE",
    Action => "ACTION",
    Add => "ADD",
    Admin => "ADMIN",
    Against => "AGAINST",
    All => "ALL",
    Allocate => "ALLOCATE",
    Alter => "ALTER",
    Always => "ALWAYS",
    Analyze => "ANALYZE",
    And => "AND",
    Anti => "ANTI",
    Any => "ANY",
    Apply => "APPLY",
    Archive => "ARCHIVE",
    Are => "ARE",
    Array => "ARRAY",
    ArrayAgg => "ARRAY_AGG",
    ArrayMaxCardinality => "ARRAY_MAX_CARDINALITY",
    As => "AS",
    Asc => "ASC",
    Asensitive => "ASENSITIVE",
    Assert => "ASSERT",
    Asymmetric => "ASYMMETRIC",
    At => "AT",
    Atomic => "ATOMIC",
    Authorization => "AUTHORIZATION",
    AutoIncrement => "AUTO_INCREMENT",
    Autoincrement => "AUTOINCREMENT",
    Avg => "AVG",
    Avro => "AVRO",
    Backward => "BACKWARD",
    Begin => "BEGIN",
    BeginFrame => "BEGIN_FRAME",
    BeginPartition => "BEGIN_PARTITION",
    Between => "BETWEEN",
    Bigint => "BIGINT",
    Bignumeric => "BIGNUMERIC",
    Binary => "BINARY",
    Blob => "BLOB",
    Boolean => "BOOLEAN",
    Both => "BOTH",
    Btree => "BTREE",
    By => "BY",
    Bypassrls => "BYPASSRLS",
    Bytea => "BYTEA",
    Cache => "CACHE",
    Call => "CALL",
    Called => "CALLED",
    Cardinality => "CARDINALITY",
    Cascade => "CASCADE",
    Cascaded => "CASCADED",
    Case => "CASE",
    Cast => "CAST",
    Ceil => "CEIL",
    Ceiling => "CEILING",
    Century => "CENTURY",
    Chain => "CHAIN",
    Change => "CHANGE",
    Char => "CHAR",
    CharLength => "CHAR_LENGTH",
    Character => "CHARACTER",
    CharacterLength => "CHARACTER_LENGTH",
    Characters => "CHARACTERS",
    Charset => "CHARSET",
    Check => "CHECK",
    Clob => "CLOB",
    Clone => "CLONE",
    Close => "CLOSE",
    Cluster => "CLUSTER",
    Coalesce => "COALESCE",
    Collate => "COLLATE",
    Collation => "COLLATION",
    Collect => "COLLECT",
    Column => "COLUMN",
    Columns => "COLUMNS",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Committed => "COMMITTED",
    Compression => "COMPRESSION",
    Compute => "COMPUTE",
    Condition => "CONDITION",
    Conflict => "CONFLICT",
    Connect => "CONNECT",
    Connection => "CONNECTION",
    Constraint => "CONSTRAINT",
    Contains => "CONTAINS",
    Convert => "CONVERT",
    Copy => "COPY",
    CopyOptions => "COPY_OPTIONS",
    Corr => "CORR",
    Corresponding => "CORRESPONDING",
    Count => "COUNT",
    CovarPop => "COVAR_POP",
    CovarSamp => "COVAR_SAMP",
    Create => "CREATE",
    Createdb => "CREATEDB",
    Createrole => "CREATEROLE",
    Credentials => "CREDENTIALS",
    Cross => "CROSS",
    Csv => "CSV",
    Cube => "CUBE",
    CumeDist => "CUME_DIST",
    Current => "CURRENT",
    CurrentCatalog => "CURRENT_CATALOG",
    CurrentDate => "CURRENT_DATE",
    CurrentDefaultTransformGroup => "CURRENT_DEFAULT_TRANSFORM_GROUP",
    CurrentPath => "CURRENT_PATH",
    CurrentRole => "CURRENT_ROLE",
    CurrentRow => "CURRENT_ROW",
    CurrentSchema => "CURRENT_SCHEMA",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentTransformGroupForType => "CURRENT_TRANSFORM_GROUP_FOR_TYPE",
    CurrentUser => "CURRENT_USER",
    Cursor => "CURSOR",
    Cycle => "CYCLE",
    Data => "DATA",
    Database => "DATABASE",
    Date => "DATE",
    Datetime => "DATETIME",
    Day => "DAY",
    Deallocate => "DEALLOCATE",
    Dec => "DEC",
    Decade => "DECADE",
    Decimal => "DECIMAL",
    Declare => "DECLARE",
    Default => "DEFAULT",
    Delete => "DELETE",
    Delimited => "DELIMITED",
    Delimiter => "DELIMITER",
    DenseRank => "DENSE_RANK",
    Deref => "DEREF",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Deterministic => "DETERMINISTIC",
    Directory => "DIRECTORY",
    Discard => "DISCARD",
    Disconnect => "DISCONNECT",
    Distinct => "DISTINCT",
    Distribute => "DISTRIBUTE",
    Div => "DIV",
    Do => "DO",
    Double => "DOUBLE",
    Dow => "DOW",
    Doy => "DOY",
    Drop => "DROP",
    Duplicate => "DUPLICATE",
    Dynamic => "DYNAMIC",
    Each => "EACH",
    Element => "ELEMENT",
    Else => "ELSE",
    Encoding => "ENCODING",
    Encryption => "ENCRYPTION",
    End => "END",
    EndFrame => "END_FRAME",
    EndPartition => "END_PARTITION",
    EndExec => "END_EXEC",
    Endpoint => "ENDPOINT",
    Engine => "ENGINE",
    Enum => "ENUM",
    Epoch => "EPOCH",
    Equals => "EQUALS",
    Error => "ERROR",
    Escape => "ESCAPE",
    Event => "EVENT",
    Every => "EVERY",
    Except => "EXCEPT",
    Exclude => "EXCLUDE",
    Exec => "EXEC",
    Execute => "EXECUTE",
    Exists => "EXISTS",
    Exp => "EXP",
    Expansion => "EXPANSION",
    Explain => "EXPLAIN",
    Extended => "EXTENDED",
    External => "EXTERNAL",
    Extract => "EXTRACT",
    Fail => "FAIL",
    False => "FALSE",
    Fetch => "FETCH",
    Fields => "FIELDS",
    File => "FILE",
    Files => "FILES",
    FileFormat => "FILE_FORMAT",
    Filter => "FILTER",
    First => "FIRST",
    FirstValue => "FIRST_VALUE",
    Float => "FLOAT",
    Floor => "FLOOR",
    Following => "FOLLOWING",
    For => "FOR",
    Force => "FORCE",
    ForceNotNull => "FORCE_NOT_NULL",
    ForceNull => "FORCE_NULL",
    ForceQuote => "FORCE_QUOTE",
    Foreign => "FOREIGN",
    Format => "FORMAT",
    Forward => "FORWARD",
    FrameRow => "FRAME_ROW",
    Free => "FREE",
    Freeze => "FREEZE",
    From => "FROM",
    Full => "FULL",
    Fulltext => "FULLTEXT",
    Function => "FUNCTION",
    Functions => "FUNCTIONS",
    Fusion => "FUSION",
    Generated => "GENERATED",
    Get => "GET",
    Global => "GLOBAL",
    Grant => "GRANT",
    Granted => "GRANTED",
    Graphviz => "GRAPHVIZ",
    Group => "GROUP",
    Grouping => "GROUPING",
    Groups => "GROUPS",
    Hash => "HASH",
    Having => "HAVING",
    Header => "HEADER",
    Hivevar => "HIVEVAR",
    Hold => "HOLD",
    Hour => "HOUR",
    Identity => "IDENTITY",
    If => "IF",
    Ignore => "IGNORE",
    Ilike => "ILIKE",
    Immutable => "IMMUTABLE",
    In => "IN",
    Increment => "INCREMENT",
    Index => "INDEX",
    Indicator => "INDICATOR",
    Inherit => "INHERIT",
    Inner => "INNER",
    Inout => "INOUT",
    Inputformat => "INPUTFORMAT",
    Insensitive => "INSENSITIVE",
    Insert => "INSERT",
    Int => "INT",
    Integer => "INTEGER",
    Intersect => "INTERSECT",
    Intersection => "INTERSECTION",
    Interval => "INTERVAL",
    Into => "INTO",
    Is => "IS",
    Isodow => "ISODOW",
    Isolation => "ISOLATION",
    Isoyear => "ISOYEAR",
    Jar => "JAR",
    Join => "JOIN",
    Json => "JSON",
    Jsonfile => "JSONFILE",
    Julian => "JULIAN",
    Key => "KEY",
    Kill => "KILL",
    Lag => "LAG",
    Language => "LANGUAGE",
    Large => "LARGE",
    Last => "LAST",
    LastValue => "LAST_VALUE",
    Lateral => "LATERAL",
    Lead => "LEAD",
    Leading => "LEADING",
    Left => "LEFT",
    Level => "LEVEL",
    Like => "LIKE",
    LikeRegex => "LIKE_REGEX",
    Limit => "LIMIT",
    Listagg => "LISTAGG",
    Ln => "LN",
    Local => "LOCAL",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Location => "LOCATION",
    Locked => "LOCKED",
    Login => "LOGIN",
    Lower => "LOWER",
    Macro => "MACRO",
    Managedlocation => "MANAGEDLOCATION",
    Match => "MATCH",
    Matched => "MATCHED",
    Materialized => "MATERIALIZED",
    Max => "MAX",
    Maxvalue => "MAXVALUE",
    Mediumint => "MEDIUMINT",
    Member => "MEMBER",
    Merge => "MERGE",
    Metadata => "METADATA",
    Method => "METHOD",
    Microsecond => "MICROSECOND",
    Microseconds => "MICROSECONDS",
    Millenium => "MILLENIUM",
    Millennium => "MILLENNIUM",
    Millisecond => "MILLISECOND",
    Milliseconds => "MILLISECONDS",
    Min => "MIN",
    Minute => "MINUTE",
    Minvalue => "MINVALUE",
    Mod => "MOD",
    Mode => "MODE",
    Modifies => "MODIFIES",
    Module => "MODULE",
    Month => "MONTH",
    Msck => "MSCK",
    Multiset => "MULTISET",
    Mutation => "MUTATION",
    Nanosecond => "NANOSECOND",
    Nanoseconds => "NANOSECONDS",
    National => "NATIONAL",
    Natural => "NATURAL",
    Nchar => "NCHAR",
    Nclob => "NCLOB",
    New => "NEW",
    Next => "NEXT",
    No => "NO",
    Nobypassrls => "NOBYPASSRLS",
    Nocreatedb => "NOCREATEDB",
    Nocreaterole => "NOCREATEROLE",
    Noinherit => "NOINHERIT",
    Nologin => "NOLOGIN",
    None => "NONE",
    Noreplication => "NOREPLICATION",
    Normalize => "NORMALIZE",
    Noscan => "NOSCAN",
    Nosuperuser => "NOSUPERUSER",
    Not => "NOT",
    Nothing => "NOTHING",
    Nowait => "NOWAIT",
    NthValue => "NTH_VALUE",
    Ntile => "NTILE",
    Null => "NULL",
    Nullif => "NULLIF",
    Nulls => "NULLS",
    Numeric => "NUMERIC",
    Nvarchar => "NVARCHAR",
    Object => "OBJECT",
    OccurrencesRegex => "OCCURRENCES_REGEX",
    OctetLength => "OCTET_LENGTH",
    Octets => "OCTETS",
    Of => "OF",
    Offset => "OFFSET",
    Old => "OLD",
    On => "ON",
    Only => "ONLY",
    Open => "OPEN",
    Operator => "OPERATOR",
    Option => "OPTION",
    Options => "OPTIONS",
    Or => "OR",
    Orc => "ORC",
    Order => "ORDER",
    Out => "OUT",
    Outer => "OUTER",
    Outputformat => "OUTPUTFORMAT",
    Over => "OVER",
    Overflow => "OVERFLOW",
    Overlaps => "OVERLAPS",
    Overlay => "OVERLAY",
    Overwrite => "OVERWRITE",
    Owned => "OWNED",
    Parameter => "PARAMETER",
    Parquet => "PARQUET",
    Partition => "PARTITION",
    Partitioned => "PARTITIONED",
    Partitions => "PARTITIONS",
    Password => "PASSWORD",
    Pattern => "PATTERN",
    Percent => "PERCENT",
    PercentRank => "PERCENT_RANK",
    PercentileCont => "PERCENTILE_CONT",
    PercentileDisc => "PERCENTILE_DISC",
    Period => "PERIOD",
    Pivot => "PIVOT",
    Placing => "PLACING",
    Plans => "PLANS",
    Portion => "PORTION",
    Position => "POSITION",
    PositionRegex => "POSITION_REGEX",
    Power => "POWER",
    Precedes => "PRECEDES",
    Preceding => "PRECEDING",
    Precision => "PRECISION",
    Prepare => "PREPARE",
    Preserve => "PRESERVE",
    Primary => "PRIMARY",
    Prior => "PRIOR",
    Privileges => "PRIVILEGES",
    Procedure => "PROCEDURE",
    Program => "PROGRAM",
    Purge => "PURGE",
    Qualify => "QUALIFY",
    Quarter => "QUARTER",
    Query => "QUERY",
    Quote => "QUOTE",
    Range => "RANGE",
    Rank => "RANK",
    Rcfile => "RCFILE",
    Read => "READ",
    Reads => "READS",
    Real => "REAL",
    Recursive => "RECURSIVE",
    Ref => "REF",
    References => "REFERENCES",
    Referencing => "REFERENCING",
    Regclass => "REGCLASS",
    RegrAvgx => "REGR_AVGX",
    RegrAvgy => "REGR_AVGY",
    RegrCount => "REGR_COUNT",
    RegrIntercept => "REGR_INTERCEPT",
    RegrR2 => "REGR_R2",
    RegrSlope => "REGR_SLOPE",
    RegrSxx => "REGR_SXX",
    RegrSxy => "REGR_SXY",
    RegrSyy => "REGR_SYY",
    Relative => "RELATIVE",
    Release => "RELEASE",
    Rename => "RENAME",
    Repair => "REPAIR",
    Repeatable => "REPEATABLE",
    Replace => "REPLACE",
    Replication => "REPLICATION",
    Restrict => "RESTRICT",
    Result => "RESULT",
    Return => "RETURN",
    Returning => "RETURNING",
    Returns => "RETURNS",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Role => "ROLE",
    Rollback => "ROLLBACK",
    Rollup => "ROLLUP",
    Row => "ROW",
    RowNumber => "ROW_NUMBER",
    Rowid => "ROWID",
    Rows => "ROWS",
    SafeCast => "SAFE_CAST",
    Savepoint => "SAVEPOINT",
    Schema => "SCHEMA",
    Scope => "SCOPE",
    Scroll => "SCROLL",
    Search => "SEARCH",
    Second => "SECOND",
    Select => "SELECT",
    Semi => "SEMI",
    Sensitive => "SENSITIVE",
    Sequence => "SEQUENCE",
    Sequencefile => "SEQUENCEFILE",
    Sequences => "SEQUENCES",
    Serde => "SERDE",
    Serializable => "SERIALIZABLE",
    Session => "SESSION",
    SessionUser => "SESSION_USER",
    Set => "SET",
    Sets => "SETS",
    Share => "SHARE",
    Show => "SHOW",
    Similar => "SIMILAR",
    Skip => "SKIP",
    Smallint => "SMALLINT",
    Snapshot => "SNAPSHOT",
    Some => "SOME",
    Sort => "SORT",
    Spatial => "SPATIAL",
    Specific => "SPECIFIC",
    Specifictype => "SPECIFICTYPE",
    Sql => "SQL",
    Sqlexception => "SQLEXCEPTION",
    Sqlstate => "SQLSTATE",
    Sqlwarning => "SQLWARNING",
    Sqrt => "SQRT",
    Stable => "STABLE",
    Stage => "STAGE",
    Start => "START",
    Static => "STATIC",
    Statistics => "STATISTICS",
    StddevPop => "STDDEV_POP",
    StddevSamp => "STDDEV_SAMP",
    Stdin => "STDIN",
    Stdout => "STDOUT",
    StorageIntegration => "STORAGE_INTEGRATION",
    Stored => "STORED",
    Strict => "STRICT",
    String => "STRING",
    Submultiset => "SUBMULTISET",
    Substring => "SUBSTRING",
    SubstringRegex => "SUBSTRING_REGEX",
    Succeeds => "SUCCEEDS",
    Sum => "SUM",
    Super => "SUPER",
    Superuser => "SUPERUSER",
    Swap => "SWAP",
    Symmetric => "SYMMETRIC",
    Sync => "SYNC",
    System => "SYSTEM",
    SystemTime => "SYSTEM_TIME",
    SystemUser => "SYSTEM_USER",
    Table => "TABLE",
    Tables => "TABLES",
    Tablesample => "TABLESAMPLE",
    Tblproperties => "TBLPROPERTIES",
    Temp => "TEMP",
    Temporary => "TEMPORARY",
    Text => "TEXT",
    Textfile => "TEXTFILE",
    Then => "THEN",
    Ties => "TIES",
    Time => "TIME",
    Timestamp => "TIMESTAMP",
    Timestamptz => "TIMESTAMPTZ",
    Timetz => "TIMETZ",
    Timezone => "TIMEZONE",
    TimezoneHour => "TIMEZONE_HOUR",
    TimezoneMinute => "TIMEZONE_MINUTE",
    Tinyint => "TINYINT",
    To => "TO",
    Top => "TOP",
    Trailing => "TRAILING",
    Transaction => "TRANSACTION",
    Transient => "TRANSIENT",
    Translate => "TRANSLATE",
    TranslateRegex => "TRANSLATE_REGEX",
    Translation => "TRANSLATION",
    Treat => "TREAT",
    Trigger => "TRIGGER",
    Trim => "TRIM",
    TrimArray => "TRIM_ARRAY",
    True => "TRUE",
    Truncate => "TRUNCATE",
    TryCast => "TRY_CAST",
    Type => "TYPE",
    Uescape => "UESCAPE",
    Unbounded => "UNBOUNDED",
    Uncache => "UNCACHE",
    Uncommitted => "UNCOMMITTED",
    Union => "UNION",
    Unique => "UNIQUE",
    Unknown => "UNKNOWN",
    Unlogged => "UNLOGGED",
    Unnest => "UNNEST",
    Unsigned => "UNSIGNED",
    Until => "UNTIL",
    Update => "UPDATE",
    Upper => "UPPER",
    Url => "URL",
    Usage => "USAGE",
    Use => "USE",
    User => "USER",
    Using => "USING",
    Uuid => "UUID",
    Valid => "VALID",
    ValidationMode => "VALIDATION_MODE",
    Value => "VALUE",
    ValueOf => "VALUE_OF",
    Values => "VALUES",
    VarPop => "VAR_POP",
    VarSamp => "VAR_SAMP",
    Varbinary => "VARBINARY",
    Varchar => "VARCHAR",
    Variables => "VARIABLES",
    Varying => "VARYING",
    Verbose => "VERBOSE",
    Versioning => "VERSIONING",
    View => "VIEW",
    Virtual => "VIRTUAL",
    Volatile => "VOLATILE",
    Week => "WEEK",
    When => "WHEN",
    Whenever => "WHENEVER",
    Where => "WHERE",
    WidthBucket => "WIDTH_BUCKET",
    Window => "WINDOW",
    With => "WITH",
    Within => "WITHIN",
    Without => "WITHOUT",
    Work => "WORK",
    Write => "WRITE",
    Xor => "XOR",
    Year => "YEAR",
    Zone => "ZONE",
}

impl Keyword {
    /// Returns the keyword as it appears in SQL text.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        RENAMED_KEYWORDS
            .iter()
            .find_map(|&(keyword, text)| (keyword == *self).then_some(text))
            .unwrap_or_else(|| self.declared_name())
    }

    /// Returns true for every variant except the sentinel.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = Error;

    /// Parses a keyword case-insensitively from its SQL text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::registry::KeywordRegistry::global()
            .lookup(s)
            .ok_or_else(|| Error::UnknownKeyword(s.to_string()))
    }
}
