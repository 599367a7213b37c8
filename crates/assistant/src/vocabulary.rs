/// Career-domain terms used by the topic gate. All entries are lowercase and
/// matched as raw substrings, so short entries such as `it`, `ai` and `hr`
/// also fire inside longer, unrelated words.
pub const VOCABULARY: &[&str] = &[
    // general
    "job",
    "career",
    "resume",
    "cv",
    "interview",
    "linkedin",
    "offer",
    "internship",
    "salary",
    "cover letter",
    "hiring",
    "company",
    "work",
    "profession",
    "skill",
    "portfolio",
    "btech",
    "ai",
    "ml",
    // job search
    "jobs",
    "vacancy",
    "recruitment",
    "recruiter",
    "apply",
    "application",
    "job opening",
    "job position",
    "job opportunity",
    "job hunt",
    "job search",
    "career opportunity",
    "fresher jobs",
    "walk-in",
    "job posting",
    "remote job",
    "on-site job",
    "hybrid job",
    // resume / cv
    "curriculum vitae",
    "resume builder",
    "resume format",
    "resume review",
    "resume edit",
    "ats",
    "ats-friendly resume",
    "resume keywords",
    "summary statement",
    "experience section",
    "education section",
    "skills section",
    // skills
    "skills",
    "hard skills",
    "soft skills",
    "technical skills",
    "communication skills",
    "leadership",
    "teamwork",
    "problem solving",
    "time management",
    "creativity",
    "analytical skills",
    "programming skills",
    "coding",
    "data analysis",
    "management skills",
    // guidance
    "career advice",
    "guidance",
    "suggestions",
    "future career",
    "career path",
    "career options",
    "career growth",
    "career planning",
    "career change",
    "switching careers",
    "industry trends",
    "job market",
    // education
    "degree",
    "diploma",
    "certification",
    "course",
    "higher education",
    "college",
    "university",
    "stream",
    "major",
    "specialization",
    "training",
    "skill development",
    // interview
    "interview questions",
    "interview preparation",
    "hr round",
    "technical round",
    "mock interview",
    "interview tips",
    "tell me about yourself",
    "strengths",
    "weaknesses",
    "salary expectation",
    "interview follow-up",
    // work life
    "workplace",
    "office",
    "professional",
    "management",
    "promotion",
    "employer",
    "employee",
    "work experience",
    "onboarding",
    "performance review",
    "appraisal",
    // compensation
    "pay",
    "compensation",
    "package",
    "ctc",
    "stipend",
    "benefits",
    "payroll",
    "increment",
    "hike",
    // fields
    "software",
    "it",
    "engineering",
    "marketing",
    "hr",
    "finance",
    "accounting",
    "design",
    "business",
    "data science",
    "cybersecurity",
    "healthcare",
    "teaching",
    "operations",
    "sales",
];
