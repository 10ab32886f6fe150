use std::collections::HashSet;
use std::sync::OnceLock;

/// Catalog of PL/SQL reserved words and common Oracle built-in packages.
///
/// The reference scanner excludes these from its results: an unqualified match
/// against this list is far more likely to be language syntax or a supplied
/// package than a user-defined object. Schema-qualified names (e.g. SYS.DUAL)
/// are never filtered by this list.
pub static PLSQL_KEYWORDS: &[&str] = &[
    "ACCESS", "ACCOUNT", "ACTIVATE", "ADD", "ADMIN", "ADVISE", "AFTER", "ALIAS", "ALL",
    "ALLOCATE", "ALLOW", "ALTER", "ANALYZE", "AND", "ANY", "ANYDATA", "ARCHIVE",
    "ARCHIVELOG", "ARRAY", "AS", "ASC", "AT", "AUDIT", "AUTHENTICATED", "AUTHORIZATION",
    "AUTO", "AUTOEXTEND", "AUTOMATIC", "BACKUP", "BECOME", "BEFORE", "BEGIN", "BETWEEN",
    "BFILE", "BITMAP", "BLOB", "BLOCK", "BODY", "BY", "CACHE", "CACHE_INSTANCES", "CANCEL",
    "CASCADE", "CASE", "CAST", "CFILE", "CHAINED", "CHANGE", "CHAR", "CHARACTER",
    "CHAR_CS", "CHECK", "CHECKPOINT", "CHOOSE", "CHUNK", "CLEAR", "CLOB", "CLONE", "CLOSE",
    "CLOSE_CACHED_OPEN_CURSORS", "CLUSTER", "COALESCE", "COLLECT", "COLUMN", "COLUMNS",
    "COMMENT", "COMMIT", "COMMITTED", "COMPATIBILITY", "COMPILE", "COMPLETE",
    "COMPOSITE_LIMIT", "COMPRESS", "COMPUTE", "CONNECT", "CONNECT_TIME", "CONSTRAINT",
    "CONSTRAINTS", "CONTENTS", "CONTINUE", "CONTROLFILE", "CONVERT", "COST",
    "CPU_PER_CALL", "CPU_PER_SESSION", "CREATE", "CROSS", "CUBE", "CURRENT",
    "CURRENT_SCHEMA", "CURREN_USER", "CURSOR", "CYCLE", "DANGLING", "DATABASE", "DATAFILE",
    "DATAFILES", "DATAOBJNO", "DATE", "DATE_CACHE", "DAY", "DBA", "DBMS_ALERT", "DBMS_AQ",
    "DBMS_AQADM", "DBMS_CRYPTO", "DBMS_JOB", "DBMS_LOB", "DBMS_LOCK", "DBMS_OUTPUT",
    "DBMS_PIPE", "DBMS_RANDOM", "DBMS_SCHEDULER", "DBMS_SQL", "DBMS_UTILITY", "DBTIMEZONE",
    "DDL", "DEBUG", "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DEFERRABLE", "DEFERRED",
    "DEGREE", "DELETE", "DEMAND", "DENSE_RANK", "DEPTH", "DESC", "DIRECTORY", "DISABLE",
    "DISASSOCIATE", "DISCONNECT", "DISK", "DISKGROUP", "DISMOUNT", "DISTINCT",
    "DISTRIBUTED", "DML", "DOUBLE", "DROP", "DUAL", "DUMP", "DYNAMIC", "EACH", "ELSE",
    "ENABLE", "END", "ENFORCE", "ENTRY", "ERROR", "ESCAPE", "EXCEPT", "EXCEPTIONS",
    "EXCHANGE", "EXCLUDING", "EXCLUSIVE", "EXECUTE", "EXISTS", "EXPIRE", "EXPLAIN",
    "EXTEND", "EXTENDS", "EXTENT", "EXTERNALLY", "FAILED_LOGIN_ATTEMPTS", "FAILGROUP",
    "FALSE", "FAST", "FILE", "FILTER", "FINISH", "FIRST", "FIRST_ROWS", "FLAGGER",
    "FLASHBACK", "FLOAT", "FLOB", "FLUSH", "FOR", "FORCE", "FOREIGN", "FREELIST",
    "FREELISTS", "FROM", "FULL", "FUNCTION", "GLOBAL", "GLOBALLY", "GLOBAL_NAME", "GRANT",
    "GROUP", "GROUPS", "HASH", "HAVING", "HEADER", "HEAP", "HOUR", "IDENTIFIED",
    "IDGENERATORS", "IDLE_TIME", "IF", "IMMEDIATE", "IN", "INCLUDING", "INCREMENT",
    "INDEX", "INDEXED", "INDEXES", "INDICATOR", "IND_PARTITION", "INITIAL", "INITIALLY",
    "INITRANS", "INSERT", "INSTANCE", "INSTANCES", "INSTEAD", "INT", "INTEGER",
    "INTEGRITY", "INTERMEDIATE", "INTERNAL_USE", "INTERSECT", "INTERVAL", "INTO",
    "INVALIDATE", "IS", "ISOLATION", "JAVA", "JOIN", "KEEP", "KEY", "KILL", "LABEL",
    "LAST", "LAYER", "LESS", "LEVEL", "LIBRARY", "LIKE", "LIMIT", "LINK", "LIST", "LOB",
    "LOCAL", "LOCK", "LOCKED", "LOG", "LOGFILE", "LOGGING", "LOGICAL",
    "LOGICAL_READS_PER_CALL", "LOGICAL_READS_PER_SESSION", "LONG", "LOOP", "MANAGE",
    "MASTER", "MAX", "MAXARCHLOGS", "MAXDATAFILES", "MAXEXTENTS", "MAXIMIZE",
    "MAXINSTANCES", "MAXLOGFILES", "MAXLOGHISTORY", "MAXLOGMEMBERS", "MAXSIZE", "MAXTRANS",
    "MAXVALUE", "MEASURES", "MEMBER", "MERGE", "MIN", "MINEXTENTS", "MINIMIZE", "MINUS",
    "MINUTE", "MINVALUE", "MLSLABEL", "MODE", "MODIFY", "MONITORING", "MONTH", "MOUNT",
    "MOVE", "MTS_DISPATCHERS", "MULTISET", "NAME", "NATIONAL", "NATURAL", "NCHAR",
    "NCHAR_CS", "NCLOB", "NEEDED", "NESTED", "NETWORK", "NEVER", "NEW", "NEXT",
    "NOARCHIVELOG", "NOAUDIT", "NOCACHE", "NOCOMPRESS", "NOCYCLE", "NOFORCE", "NOLOGGING",
    "NOMAXVALUE", "NOMINVALUE", "NONE", "NOORDER", "NOOVERRIDE", "NOPARALLEL", "NOREVERSE",
    "NORMAL", "NOSORT", "NOT", "NOTHING", "NOWAIT", "NULL", "NUMBER", "NUMERIC",
    "NVARCHAR2", "OBJECT", "OBJNO", "OBJNO_REUSE", "OF", "OFF", "OFFLINE", "OID",
    "OIDINDEX", "OLD", "ON", "ONLINE", "ONLY", "OPAQUE", "OPEN", "OPERATOR", "OPTIMAL",
    "OPTIMIZER_GOAL", "OPTION", "OR", "ORDER", "ORGANIZATION", "OSERROR", "OVER",
    "OVERFLOW", "OVERRIDE", "OWN", "PACKAGE", "PARALLEL", "PARAMETERS", "PARENT",
    "PARTITION", "PASSWORD", "PASSWORD_GRACE_TIME", "PASSWORD_LIFE_TIME",
    "PASSWORD_LOCK_TIME", "PASSWORD_REUSE_MAX", "PASSWORD_REUSE_TIME",
    "PASSWORD_VERIFY_FUNCTION", "PCTFREE", "PCTINCREASE", "PCTTHRESHOLD", "PCTUSED",
    "PCTVERSION", "PERCENT", "PERMANENT", "PFILE", "PHYSICAL", "PLAN", "PLSQL_DEBUG",
    "POLICY", "POST_TRANSACTION", "PRECISION", "PREPARE", "PRESERVE", "PRIMARY", "PRIOR",
    "PRIVATE", "PRIVATE_SGA", "PRIVILEGE", "PRIVILEGES", "PROCEDURE", "PROFILE",
    "PROTECTED", "PUBLIC", "PURGE", "QUEUE", "QUOTA", "RAISE", "RANGE", "RAW", "RBA",
    "READ", "READUP", "REAL", "REBUILD", "RECOVER", "RECOVERABLE", "RECOVERY", "REF",
    "REFERENCES", "REFERENCING", "REFRESH", "RENAME", "REPLACE", "RESET", "RESETLOGS",
    "RESIZE", "RESOLVE", "RESOURCE", "RESTRICTED", "RETURN", "RETURNING", "REUSE",
    "REVERSE", "REVOKE", "ROLE", "ROLES", "ROLLBACK", "ROLLUP", "ROW", "ROWID", "ROWNUM",
    "ROWS", "RULE", "SAMPLE", "SAVEPOINT", "SB4", "SCAN_INSTANCES", "SCHEMA", "SCN",
    "SCOPE", "SD_ALL", "SD_INHIBIT", "SD_SHOW", "SECOND", "SEGMENT", "SEG_BLOCK",
    "SEG_FILE", "SELECT", "SEQUENCE", "SERIALIZABLE", "SESSION", "SESSIONS_PER_USER",
    "SESSIONTIMEZONE", "SESSION_CACHED_CURSORS", "SET", "SETS", "SHARE", "SHARED",
    "SHARED_POOL", "SHRINK", "SIZE", "SKIP", "SKIP_UNUSABLE_INDEXES", "SMALLINT",
    "SNAPSHOT", "SOME", "SORT", "SPECIFICATION", "SPFILE", "SPLIT", "SQL", "SQLERROR",
    "SQL_TRACE", "STANDBY", "START", "STARTING", "STATEMENT_ID", "STATISTICS", "STOP",
    "STORAGE", "STORE", "SUBPARTITION", "SUBSTITUTABLE", "SUCCESSFUL", "SWITCH", "SYNONYM",
    "SYSDATE", "SYSDBA", "SYSOPER", "SYSTEM", "SYS_REFCURSOR", "TABLE", "TABLES",
    "TABLESPACE", "TABLESPACE_NO", "TABNO", "TEMPFILE", "TEMPLATE", "TEMPORARY",
    "TERMINATE", "THAN", "THE", "THEN", "THREAD", "THROUGH", "TIME", "TIMESTAMP",
    "TIMEZONE_ABBR", "TIMEZONE_HOUR", "TIMEZONE_MINUTE", "TIMEZONE_REGION", "TO",
    "TOPLEVEL", "TRACE", "TRACING", "TRANSACTION", "TRANSITIONAL", "TRIGGER", "TRIGGERS",
    "TRUE", "TRUNCATE", "TX", "TYPE", "UB2", "UBA", "UID", "UNARCHIVED", "UNDO", "UNIFORM",
    "UNION", "UNIQUE", "UNLIMITED", "UNLOCK", "UNPACKED", "UNPROTECTED", "UNRECOVERABLE",
    "UNTIL", "UNUSABLE", "UNUSED", "UPDATABLE", "UPDATE", "UPGRADE", "USAGE", "USE",
    "USER", "USING", "UTL_FILE", "UTL_HTTP", "UTL_RAW", "UTL_SMTP", "UTL_TCP", "UTL_URL",
    "VALIDATE", "VALIDATION", "VALUE", "VALUES", "VARCHAR", "VARCHAR2", "VARYING", "VIEW",
    "WHEN", "WHENEVER", "WHERE", "WHILE", "WITH", "WITHIN", "WITHOUT", "WORK", "WRITE",
    "WRITEDOWN", "WRITEUP", "XMLATTRIBUTES", "XMLEXISTS", "XMLNAMESPACES", "XMLTYPE",
    "YEAR", "ZONE",
];

fn keyword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| PLSQL_KEYWORDS.iter().copied().collect())
}

/// Case-insensitive membership test against the keyword catalog.
pub fn is_keyword(word: &str) -> bool {
    keyword_set().contains(word.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_are_keywords() {
        assert!(is_keyword("SELECT"));
        assert!(is_keyword("select"));
        assert!(is_keyword("Begin"));
    }

    #[test]
    fn builtin_packages_are_keywords() {
        assert!(is_keyword("DBMS_OUTPUT"));
        assert!(is_keyword("utl_file"));
        assert!(is_keyword("DUAL"));
    }

    #[test]
    fn user_object_names_are_not_keywords() {
        assert!(!is_keyword("EMPLOYEES"));
        assert!(!is_keyword("my_pkg"));
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let set: HashSet<_> = PLSQL_KEYWORDS.iter().collect();
        assert_eq!(set.len(), PLSQL_KEYWORDS.len());
    }
}
