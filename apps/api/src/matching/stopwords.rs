// English stopword table used by the phrase extractor to find chunk
// boundaries. Base list follows the usual IR stoplists, extended with the
// recruiting filler that dominates job descriptions ("looking", "seeking",
// "candidate", ...). Tokens are matched after lowercasing.

pub const STOPWORDS: &[&str] = &[
    // articles, pronouns, auxiliaries
    "a", "an", "the", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "would",
    "should", "could", "ought", "will", "shall", "can", "may", "might", "must",
    // conjunctions, prepositions
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "also", "via", "per", "within", "without",
    "across", "along", "among", "around", "upon", "toward", "towards",
    // job-posting filler
    "looking", "seeking", "hiring", "join", "joining", "ideal", "candidate", "candidates", "role",
    "roles", "position", "positions", "opportunity", "opportunities", "responsibilities",
    "responsibility", "requirements", "requirement", "required", "require", "requires",
    "preferred", "prefer", "qualifications", "qualification", "qualified", "plus", "bonus",
    "nice", "able", "ability", "etc", "eg", "ie", "including", "include", "includes", "year",
    "years", "day", "days", "week", "weeks", "month", "months", "well", "willing", "want",
    "wants", "need", "needs", "needed", "help", "helps", "like", "strong", "demonstrated",
    "proven", "excellent", "good", "great",
];
