//! Literal content the site ships with.

use crate::content::store::ContentStore;
use crate::models::content::{EducationEntry, EndDate, ExperienceEntry, Project, SkillCategory};

const BIO: &str = "
I'm a passionate AI Engineer with expertise in machine learning, deep learning,
and natural language processing. I build intelligent systems that solve real-world problems.
";

const ABOUT: &str = "
As an AI Engineer with over 5 years of experience, I specialize in developing cutting-edge
artificial intelligence solutions that drive business value. My expertise spans machine learning,
deep learning, natural language processing, and computer vision.

I'm passionate about creating AI systems that are not only technically sound but also
ethical, explainable, and user-friendly. My approach combines strong theoretical knowledge
with practical implementation skills to deliver solutions that make a real impact.

Throughout my career, I've worked on diverse projects ranging from recommendation systems
and predictive analytics to conversational AI and image recognition. I enjoy tackling
complex problems and transforming raw data into actionable insights and intelligent applications.
";

const TECHNICAL_SKILLS: &[&str] = &[
    "Python",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Keras",
    "SQL",
    "NoSQL",
    "Docker",
    "Kubernetes",
    "Git",
    "REST APIs",
    "FastAPI",
    "Flask",
    "Django",
    "AWS",
];

const AI_ML_SKILLS: &[&str] = &[
    "Machine Learning",
    "Deep Learning",
    "Natural Language Processing",
    "Computer Vision",
    "Reinforcement Learning",
    "Neural Networks",
    "Generative AI",
    "LLMs",
    "Transformers",
    "BERT",
    "GPT",
    "Data Mining",
    "Feature Engineering",
    "Model Deployment",
];

const TOOLS_PLATFORMS: &[&str] = &[
    "AWS SageMaker",
    "Google Cloud AI",
    "Azure ML",
    "Hugging Face",
    "MLflow",
    "Weights & Biases",
    "Jupyter",
    "Pandas",
    "NumPy",
    "Matplotlib",
    "Streamlit",
    "Gradio",
    "CUDA",
    "Ray",
];

impl ContentStore {
    /// Builds the store from the owner's shipped content.
    pub fn seeded() -> Self {
        let mut store = ContentStore::new(BIO, ABOUT)
            .with_skills(SkillCategory::Technical, TECHNICAL_SKILLS)
            .with_skills(SkillCategory::AiMl, AI_ML_SKILLS)
            .with_skills(SkillCategory::Tools, TOOLS_PLATFORMS);

        for project in seed_projects() {
            store.add_project(project);
        }
        for entry in seed_experience() {
            store.add_experience(entry);
        }
        for entry in seed_education() {
            store.add_education(entry);
        }
        store
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    category: &str,
    description: &str,
    technologies: &[&str],
    image: &str,
    repo_url: &str,
    demo_url: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        technologies: tags(technologies),
        image: Some(image.to_string()),
        demo_url: demo_url.map(str::to_string),
        repo_url: Some(repo_url.to_string()),
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        project(
            "Intelligent Document Processing System",
            "Natural Language Processing",
            "Developed an end-to-end document processing system using transformer-based models to extract, classify, and analyze information from unstructured documents.",
            &["PyTorch", "Transformers", "FastAPI", "Docker", "AWS"],
            "project1.jpg",
            "https://github.com/yourusername/document-processing",
            Some("https://demo-url.com/document-processing"),
        ),
        project(
            "Predictive Maintenance AI",
            "Time Series Analysis",
            "Built a predictive maintenance system for industrial equipment using time series forecasting and anomaly detection algorithms.",
            &["TensorFlow", "Keras", "Prophet", "Docker", "Azure"],
            "project2.jpg",
            "https://github.com/yourusername/predictive-maintenance",
            None,
        ),
        project(
            "Conversational AI Assistant",
            "Natural Language Processing",
            "Created a domain-specific conversational AI assistant using fine-tuned LLMs and retrieval-augmented generation techniques.",
            &["PyTorch", "Hugging Face", "LangChain", "FastAPI", "Redis"],
            "project3.jpg",
            "https://github.com/yourusername/conversational-ai",
            Some("https://demo-url.com/assistant"),
        ),
        project(
            "Computer Vision for Retail Analytics",
            "Computer Vision",
            "Implemented a computer vision system for retail stores to analyze customer behavior, optimize store layouts, and improve the shopping experience.",
            &["PyTorch", "OpenCV", "YOLO", "TensorRT", "Kubernetes"],
            "project4.jpg",
            "https://github.com/yourusername/retail-vision",
            None,
        ),
        project(
            "Recommendation Engine",
            "Recommender Systems",
            "Designed and deployed a hybrid recommendation engine combining collaborative filtering and content-based approaches for a media streaming platform.",
            &["TensorFlow", "Scikit-learn", "FastAPI", "PostgreSQL", "AWS"],
            "project5.jpg",
            "https://github.com/yourusername/recommendation-engine",
            None,
        ),
        project(
            "AI Model Monitoring Platform",
            "MLOps",
            "Built a comprehensive platform for monitoring ML models in production, detecting drift, and automating retraining processes.",
            &["Python", "Prometheus", "Grafana", "Docker", "Kubernetes"],
            "project6.jpg",
            "https://github.com/yourusername/model-monitoring",
            None,
        ),
    ]
}

fn seed_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior AI Engineer".to_string(),
            company: "TechCorp AI".to_string(),
            start_date: "Jan 2022".to_string(),
            end_date: EndDate::Present,
            description: "
                * Led the development of a large-scale NLP system for document processing, improving accuracy by 35%
                * Designed and implemented a computer vision solution for manufacturing quality control
                * Mentored junior engineers and established best practices for ML model development and deployment
                * Collaborated with product teams to define AI roadmap and technical requirements
            "
            .to_string(),
            technologies: tags(&["PyTorch", "Transformers", "FastAPI", "Docker", "Kubernetes", "AWS"]),
        },
        ExperienceEntry {
            title: "Machine Learning Engineer".to_string(),
            company: "DataSmart Solutions".to_string(),
            start_date: "Mar 2019".to_string(),
            end_date: EndDate::from("Dec 2021"),
            description: "
                * Developed recommendation algorithms that increased user engagement by 28%
                * Built and deployed predictive models for customer churn reduction
                * Implemented data pipelines for efficient processing of large datasets
                * Collaborated with data scientists to optimize model performance
            "
            .to_string(),
            technologies: tags(&["TensorFlow", "Scikit-learn", "Keras", "SQL", "Airflow", "GCP"]),
        },
        ExperienceEntry {
            title: "Data Scientist".to_string(),
            company: "AI Innovations".to_string(),
            start_date: "Jun 2017".to_string(),
            end_date: EndDate::from("Feb 2019"),
            description: "
                * Conducted exploratory data analysis and feature engineering for various ML projects
                * Developed classification models for customer segmentation
                * Created interactive dashboards for visualizing model results
                * Participated in client meetings to present findings and recommendations
            "
            .to_string(),
            technologies: tags(&["Python", "Pandas", "Scikit-learn", "Matplotlib", "SQL", "Tableau"]),
        },
    ]
}

fn seed_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "Master of Science in Artificial Intelligence".to_string(),
            institution: "Stanford University".to_string(),
            start_date: "2015".to_string(),
            end_date: EndDate::from("2017"),
            description: "
                * Specialized in Machine Learning and Natural Language Processing
                * Research assistant in the AI Lab working on deep learning applications
                * Thesis: \"Attention Mechanisms in Neural Networks for Document Classification\"
            "
            .to_string(),
        },
        EducationEntry {
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            start_date: "2011".to_string(),
            end_date: EndDate::from("2015"),
            description: "
                * Minor in Mathematics
                * Dean's List for Academic Excellence
                * Participated in AI and Machine Learning student research group
            "
            .to_string(),
        },
    ]
}
