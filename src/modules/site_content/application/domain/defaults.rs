//! Seed values for the first active row of each content table.

use super::entities::{AboutFields, EducationFields, HomeFields, InternshipFields};

pub fn default_home() -> HomeFields {
    HomeFields {
        name: "HARSHIT RAJ".to_string(),
        title: "Full Stack Developer | Cybersecurity Enthusiast".to_string(),
        education: "B.Tech CSE @ LPU".to_string(),
        ..Default::default()
    }
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn default_about() -> AboutFields {
    AboutFields {
        bio: text(
            "I am a passionate Full Stack Developer and Cybersecurity Enthusiast currently \
             pursuing my B.Tech in Computer Science and Engineering at Lovely Professional \
             University. With hands-on experience in Python, Django, React, and various \
             cybersecurity tools, I am eager to contribute to innovative projects and continue \
             learning new technologies.",
        ),
        skills_languages: text("Python, Java, C++"),
        skills_frameworks: text("React, Django"),
        skills_tools: text("MySQL, Git, AWS, Kali Linux"),
        skills_soft: text("Creative, Problem Solver, Active Listener, Adaptability"),
        internship_1: InternshipFields {
            company: text("Conquest Tech Solutions"),
            position: text("Intern Computer Analyst"),
            date: text("June-July 2023"),
            description: text(
                "Conducted software test evaluations, identified issues, and reviewed system functionalities\n\
                 Created and maintained structured documentation, reports, and workflow summaries\n\
                 Interacted with team members to understand requirements",
            ),
            tech: text("Git/Github, MS Office, Bug Tracking Systems"),
        },
        internship_2: InternshipFields {
            company: text("Coincent.ai"),
            position: text("Cyber Security & Ethical Hacking Training"),
            date: text("January-March 2023"),
            description: text(
                "Gained Hands-on experience in network security, penetration testing, and threat analysis\n\
                 Worked with tools to identify vulnerabilities and understand secure solutions\n\
                 Improved understanding of system security and ethical hacking principles",
            ),
            tech: text("Kali Linux Tools, Nmap, Burp Suite, Wireshark"),
        },
        certificates: text(
            "Master Generative AI & Generative AI tools by Infosys Springboard (Aug 2025)\n\
             Privacy and Security in Online Social Media by NPTEL (April 2025)\n\
             Amazon Web Service (AWS) Certified by Infosys Springboard (April 2024)\n\
             Fundamentals of Network Communication by University of Colorado, Coursera (Sept 2024)\n\
             GCP Cloud Digital Leader Certification by KodeKloud (April 2023)\n\
             Cyber Security and Ethical Hacking by Coincent.ai (March 2023)",
        ),
        education_1: EducationFields {
            institution: text("Lovely Professional University"),
            degree: text("B.Tech - Computer Science and Engineering"),
            date: text("Since August 2024"),
            cgpa: text("CGPA: 6.65"),
            location: text("Phagwara, Punjab"),
        },
        education_2: EducationFields {
            institution: text("Lovely Professional University"),
            degree: text("Diploma Computer Science and Engineering"),
            date: text("August 2021 - June 2024"),
            cgpa: text("CGPA: 7.3"),
            location: text("Phagwara, Punjab"),
        },
    }
}
