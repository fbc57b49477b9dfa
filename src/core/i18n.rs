// Bilingual text substitution: exact key lookup, nothing cleverer.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Fr,
}

impl Language {
    pub fn from_tag(tag: &str) -> Option<Language> {
        // Accept full locale tags like "fr-FR".
        match tag.split('-').next() {
            Some("en") => Some(Language::En),
            Some("fr") => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

// (key, english, french)
pub(crate) const ENTRIES: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav-home", "Home", "Accueil"),
    ("nav-about", "About", "À propos"),
    ("nav-portfolio", "Portfolio", "Portfolio"),
    ("nav-contact", "Contact", "Contact"),
    // Hero section
    ("hero-title", "Tristan-Gael Bara", "Tristan-Gael Bara"),
    ("hero-subtitle", "Research & VR Specialist", "Chercheur en IHM"),
    ("hero-learn-more", "Learn More", "En Savoir Plus"),
    ("hero-cta", "Get in Touch", "Me Contacter"),
    // About section
    ("about-title", "About Me", "À propos"),
    ("about-subtitle", "", ""),
    (
        "about-intro-1",
        "I am a researcher and developer with a background in Cognitive Psychology and Human–Computer Interaction. My expertise lies in designing and implementing virtual reality applications for clinical and research purposes. My work aims to advance our understanding of human cognition and behavior through immersive, reproducible, and data-driven environments.",
        "Je suis un chercheur et développeur spécialisé en Psychologie Cognitive et en Interactions Homme-Machine. Mon expertise réside dans la conception et l'implémentation d'applications de réalité virtuelle à des fins cliniques et de recherche. Mon travail vise à faire progresser notre compréhension de la cognition et du comportement humains grâce à des environnements immersifs, reproductibles et permettant la récolte et l'analyse de données.",
    ),
    (
        "about-intro-2",
        "I hold a Master's degree in Cognitive Psychology from the Paris Descartes University during which I researched the adaptation to non-individual Head-Related Transfer Functions for spatial audio in VR. I was a PhD student at the Conservatoire National des Arts et Métiers (CNAM) in Paris, specialized in Human-Computer Interaction. My research explored the use of virtual reality for neuropsychological assessment and rehabilitation, focusing on creating immersive and interactive environments to diagnose a neuropsychological disorder called Unilateral Spatial Neglect, and develop innovative therapeutic approaches.",
        "Je détiens un Master de recherche en Psychologie Cognitive de l'Université Paris Descartes, durant lequel j'ai réalisé des travaux de recherche sur l'adaptation aux fonctions de transfert non-individuelles pour l'audio spatial en RV. J'ai été doctorant au Conservatoire National des Arts et Métiers (CNAM) à Paris, spécialisé en Interaction Homme-Machine. Ma recherche a exploré la création d'entraînements multisensoriels en réalité virtuelle, et tout particulièrement leur application au développement de jeux thérapeutiques pour le diagnostic et la réhabilitation d'un trouble neuropsychologique appelé Négligence Spatiale Unilatérale.",
    ),
    ("about-expertise", "Research Expertise", "Expertise de recherche"),
    ("about-tools", "Tools & Technologies", "Outils et technologies"),
    ("about-core-competencies", "Core Competencies", "Compétences clés"),
    ("about-core-research", "Research & Analysis", "Recherche & Analyse"),
    ("about-core-methodology", "Research Methodology", "Méthodologie scientifique"),
    ("about-core-statistics", "Statistical Analysis", "Analyse Statistique"),
    ("about-core-visualization", "Data Visualization", "Visualisation de Données"),
    ("about-core-writing", "Scientific Writing", "Rédaction Scientifique"),
    ("about-core-tools", "Tools", "Outils"),
    ("about-core-unity", "Unity", "Unity"),
    ("about-core-matlab", "Matlab", "Matlab"),
    ("about-core-r", "R", "R"),
    ("about-core-blender", "Blender", "Blender"),
    ("about-core-programming", "Programming", "Programmation"),
    ("about-core-csharp", "C#, .Net, Blazor", "C#, .Net, Blazor"),
    ("about-core-python", "Python", "Python"),
    ("about-core-js", "JavaScript, HTML/CSS", "JavaScript, HTML/CSS"),
    ("about-core-cpp", "C++", "C++"),
    ("about-core-languages", "Languages", "Langues"),
    ("about-core-english", "English (Near-fluent)", "Anglais (niveau avancé)"),
    ("about-core-french", "French (Native)", "Français (Natif)"),
    // Portfolio section
    ("portfolio-title", "Portfolio", "Portfolio"),
    ("portfolio-subtitle", "", ""),
    // Project cards
    (
        "project-vr-title",
        "VR Diagnostic Tasks for USN",
        "Réalité Virtuelle & Diagnostic de la NSU",
    ),
    (
        "project-vr-description",
        "Virtual reality tasks for diagnosing Unilateral Spatial Neglect in patients, featuring interactive immersive environments and precise tracking capabilities.",
        "Tâches de réalité virtuelle pour diagnostiquer la Négligence Spatiale Unilatérale chez les patients, avec des environnements immersifs interactifs.",
    ),
    ("project-hrtf-title", "HRTF Adaptation", "Adaptation aux HRTF"),
    (
        "project-hrtf-description",
        "Research project focusing on non-individual Head-Related Transfer Function adaptation for personalized spatial audio experiences in virtual environments.",
        "Projet de recherche axé sur l'adaptation à des fonctions de transfert non-individuelles pour des expériences audio spatiales personnalisées.",
    ),
    (
        "project-sonification-title",
        "Sonification of 3D shapes",
        "Sonification de formes 3D",
    ),
    (
        "project-sonification-description",
        "Research project focusing on the sonification of 3D shapes. Explored the use of timbre and spatialization to convey geometric properties through sound.",
        "Exploration de l'utilisation du timbre et de la spatialisation pour la sonification de formes 3D, afin de transmettre les propriétés géométriques par le son.",
    ),
    // Contact section
    ("contact-title", "Contact", "Contact"),
    ("contact-subtitle", "Let's discuss your next project", ""),
    ("contact-email-title", "Email", "Email"),
    ("contact-location-title", "Location", "Localisation"),
    (
        "contact-location",
        "Rennes, Paris - Available for remote work",
        "Rennes, Paris - Disponible en télétravail",
    ),
    ("contact-seeking-title", "Seeking", "Recherche"),
    (
        "contact-seeking",
        "Research positions in VR, spatial audio, cognitive science, or UX research roles",
        "Postes de recherche en VR, audio spatial, sciences cognitives ou UX",
    ),
    ("contact-linkedin", "LinkedIn", "LinkedIn"),
    ("contact-scholar", "Google Scholar", "Google Scholar"),
    // VR diagnostic project page
    (
        "vr-title",
        "VR Diagnostic Tasks for USN",
        "Tâches de Diagnostic en RV pour la NSU",
    ),
    ("vr-subtitle", "", ""),
    ("vr-context-title", "Context", "Contexte"),
    (
        "vr-context-p1",
        "Unilateral Spatial Neglect (USN) is a complex neuropsychological disorder characterized by the inability to detect, orient towards, or respond to stimuli presented on the side contralateral to a brain lesion. Traditional paper-and-pencil diagnostic tools lack sensitivity and ecological validity.",
        "La Négligence Spatiale Unilatérale (NSU) est un trouble neuropsychologique complexe qui se manifeste par une incapacité à détecter, s'orienter vers ou répondre à des stimuli présentés du côté opposé à une lésion cérébrale. Les outils de diagnostic traditionnels (papier-crayon) manquent de sensibilité et de pertinence écologique.",
    ),
    ("vr-goals-title", "Goals", "Objectifs"),
    (
        "vr-goals-p1",
        "This project aimed to develop and validate a series of virtual reality diagnostic tasks for USN. The goal was to create immersive and interactive environments that mimic real-world scenarios to provide a more accurate and comprehensive assessment of spatial deficits.",
        "Ce projet visait à développer et valider une série de tâches de diagnostic en réalité virtuelle pour la NSU. L'objectif était de créer des environnements immersifs et interactifs qui imitent des scénarios du monde réel pour fournir une évaluation plus précise et complète des déficits spatiaux.",
    ),
    ("vr-contribution-title", "Contribution", "Contribution"),
    (
        "vr-contribution-p1",
        "I designed and developed the VR application using Unity 3D, focusing on creating engaging tasks, collecting precise data (e.g., eye tracking, head tracking, hand trajectories), and an intuitive user interface for both clinicians and patients.",
        "J'ai conçu et développé l'application de RV en utilisant Unity 3D, en me concentrant sur la création de tâches engageantes, la collecte de données précises (par exemple, suivi du regard, suivi de la tête, trajectoires de la main) et une interface utilisateur intuitive pour les cliniciens et les patients.",
    ),
    ("vr-replica-title", "VR replica", "Réplique RV"),
    ("vr-eco-title", "Ecological version", "Version écologique"),
    (
        "vr-bells-replica-p1",
        "The VR Bells Test replicates the traditional paper-and-pencil version in a virtual environment. The bells and the distractors are projected on a cylindrical screen. The patient is asked to find the bells. To do that the patient has to point a laser with the controller and press to select the bell. On selection a circle appears around the bell. The system records not only the number and the position of the bells or distractors selected, but also the complete spatial exploration of the patient. The application provides a detailed analysis of the performance, and a 2d visualization of the exploration. The strength of this application lies in testing far space neglect (opposed to near space neglect in the paper version), and in the precision and richness of the data collected.",
        "Le test des cloches en RV réplique la version traditionnelle papier-crayon dans un environnement virtuel. Les cloches et les distracteurs sont projetés sur un écran cylindrique. Le patient doit trouver les cloches. Pour ce faire, le patient doit pointer un laser avec le contrôleur et appuyer pour sélectionner la cloche. Lors de la sélection, un cercle apparaît autour de la cloche. Le système enregistre non seulement le nombre et la position des cloches ou des distracteurs sélectionnés, mais aussi l'exploration spatiale complète du patient. L'application fournit une analyse détaillée des performances et une visualisation 2D de l'exploration. La force de cette application réside dans le test de la négligence de l'espace lointain (par opposition à la négligence de l'espace proche dans la version papier), ainsi que dans la précision et la richesse des données collectées.",
    ),
    (
        "vr-bells-replica-caption1",
        "Demonstration of the VR Bells Test showing patient interaction and spatial exploration tracking",
        "Démonstration du test des cloches en RV montrant l'interaction du patient et le suivi de l'exploration spatiale",
    ),
    (
        "vr-bells-replica-caption2",
        "Visualization of the VR Bells Test results showing selected bells in order",
        "Visualisation des résultats du test des cloches en RV montrant les cloches sélectionnées dans l'ordre",
    ),
    (
        "vr-bells-eco-p1",
        "The ecological version of the VR Bells Test offers enhanced real-world relevance by integrating the assessment into naturalistic environments and scenarios. Unlike the traditional replica that maintains the abstract nature of the original paper-and-pencil test, this ecological adaptation embeds the task within meaningful contexts that patients might encounter in daily life.",
        "La version écologique du test des cloches en RV offre une pertinence accrue pour le monde réel en intégrant l'évaluation dans des environnements et des scénarios naturalistes. Contrairement à la réplique traditionnelle qui conserve la nature abstraite du test papier-crayon original, cette adaptation écologique intègre la tâche dans des contextes significatifs que les patients peuvent rencontrer dans la vie quotidienne.",
    ),
    (
        "vr-bells-eco-p2",
        "This approach increases ecological validity and provides more meaningful insights into how spatial neglect affects real-world functioning. The immersive environment allows for assessment of spatial attention in contexts that are more representative of everyday activities, potentially revealing deficits that might not be apparent in traditional clinical testing scenarios.",
        "Cette approche augmente la validité écologique et fournit des informations plus significatives sur la manière dont la négligence spatiale affecte le fonctionnement dans le monde réel. L'environnement immersif permet d'évaluer l'attention spatiale dans des contextes plus représentatifs des activités quotidiennes, révélant potentiellement des déficits qui pourraient ne pas être apparents dans les scénarios de tests cliniques traditionnels.",
    ),
    (
        "vr-bells-eco-caption",
        "Ecological version of the VR test showing a more naturalistic environment for spatial attention assessment",
        "Version écologique du test en RV montrant un environnement plus naturaliste pour l'évaluation de l'attention spatiale",
    ),
    (
        "vr-baking-replica-p1",
        "The VR Baking Tray Test is an ecological adaptation of a traditional neuropsychological assessment for detecting spatial neglect. In this virtual environment, patients are presented with a kitchen scene where they must place objects (such as cookies or pastries) onto a baking tray. This test evaluates spatial awareness and attention in a more realistic, everyday context.",
        "Le test du plateau de cuisson en RV est une adaptation écologique d'une évaluation neuropsychologique traditionnelle pour détecter la négligence spatiale. Dans cet environnement virtuel, les patients sont présentés avec une scène de cuisine où ils doivent placer des objets (tels que des biscuits ou des pâtisseries) sur un plateau de cuisson. Ce test évalue la conscience spatiale et l'attention dans un contexte quotidien plus réaliste.",
    ),
    (
        "vr-baking-replica-p2",
        "The strength of this VR adaptation lies in its ecological validity - it simulates real-world activities that patients encounter in daily life. The system tracks hand movements, object placement patterns, and spatial distribution of actions, providing detailed insights into functional spatial abilities that traditional paper-and-pencil tests cannot capture.",
        "La force de cette adaptation en RV réside dans sa validité écologique - elle simule des activités du monde réel que les patients rencontrent dans la vie quotidienne. Le système suit les mouvements de la main, les schémas de placement des objets et la distribution spatiale des actions, fournissant des informations détaillées sur les capacités spatiales fonctionnelles que les tests papier-crayon traditionnels ne peuvent pas capturer.",
    ),
    (
        "vr-baking-replica-caption",
        "Demonstration of the VR Baking Tray Test",
        "Démonstration du test du plateau de cuisson en RV",
    ),
    (
        "vr-baking-eco-p1",
        "The ecological version of the VR Baking Tray Test enhances realism by incorporating more naturalistic kitchen environments and varied task scenarios. This advanced adaptation moves beyond the basic replica to create authentic cooking situations that better reflect real-world spatial challenges patients face in their daily activities.",
        "La version écologique du test du plateau de cuisson en RV améliore le réalisme en intégrant des environnements de cuisine plus naturalistes et des scénarios de tâches variés. Cette adaptation avancée va au-delà de la simple réplique pour créer des situations de cuisine authentiques qui reflètent mieux les défis spatiaux du monde réel auxquels les patients sont confrontés dans leurs activités quotidiennes.",
    ),
    (
        "vr-baking-eco-p2",
        "This ecological approach provides deeper insights into functional spatial abilities by presenting tasks within meaningful contexts. The enhanced environmental complexity and realistic interactions offer a more comprehensive assessment of how spatial neglect affects everyday kitchen activities and food preparation tasks.",
        "Cette approche écologique fournit des informations plus approfondies sur les capacités spatiales fonctionnelles en présentant des tâches dans des contextes significatifs. La complexité environnementale accrue et les interactions réalistes offrent une évaluation plus complète de la manière dont la négligence spatiale affecte les activités de cuisine quotidiennes et les tâches de préparation des aliments.",
    ),
    (
        "vr-baking-eco-caption",
        "Ecological version of the VR Baking Tray Test showing enhanced realistic kitchen environment",
        "Version écologique du test du plateau de cuisson en RV montrant un environnement de cuisine réaliste amélioré",
    ),
    (
        "vr-baking-eco-caption-normal",
        "Normal performance pattern",
        "Schéma de performance normale",
    ),
    (
        "vr-baking-eco-caption-patient",
        "Patient with spatial neglect",
        "Patient atteint de négligence spatiale",
    ),
    (
        "vr-bisection-replica-p1",
        "The VR Bisection Task is a digital adaptation of the traditional line bisection test, a fundamental assessment tool for detecting spatial neglect. In this virtual environment, patients are presented with lines of varying lengths and orientations that they must bisect as accurately as possible using VR controllers or hand tracking.",
        "La tâche de bissection en RV est une adaptation numérique du test de bissection de ligne traditionnel, un outil d'évaluation fondamental pour détecter la négligence spatiale. Dans cet environnement virtuel, les patients sont présentés avec des lignes de différentes longueurs et orientations qu'ils doivent bissecter aussi précisément que possible à l'aide de contrôleurs de RV ou du suivi des mains.",
    ),
    (
        "vr-bisection-replica-p2",
        "This VR implementation offers several advantages over traditional paper-and-pencil versions, including precise measurement of bisection accuracy, reaction times, and movement patterns. The system can present lines in different spatial planes and orientations, providing a more comprehensive assessment of spatial attention deficits across various visual field regions.",
        "Cette implémentation en RV offre plusieurs avantages par rapport aux versions papier-crayon traditionnelles, notamment une mesure précise de la précision de la bissection, des temps de réaction et des schémas de mouvement. Le système peut présenter des lignes dans différents plans spatiaux et orientations, offrant une évaluation plus complète des déficits d'attention spatiale dans diverses régions du champ visuel.",
    ),
    (
        "vr-bisection-replica-caption",
        "VR Bisection Task interface showing line bisection assessment in virtual environment",
        "Interface de la tâche de bissection en RV montrant l'évaluation de la bissection de ligne dans un environnement virtuel",
    ),
    (
        "vr-pubs-title",
        "Scientific Publications",
        "Publications Scientifiques",
    ),
    ("vr-view-pub", "View on Google Scholar", "Voir sur Google Scholar"),
    ("vr-back-button", "Back to Portfolio", "Retour au Portfolio"),
    // HRTF adaptation project page
    (
        "hrtf-title",
        "HRTF Adaptation Research",
        "Recherche sur l'Adaptation aux HRTF",
    ),
    ("hrtf-subtitle", "", ""),
    ("hrtf-context-title", "Context", "Contexte"),
    (
        "hrtf-context-p1",
        "Head-Related Transfer Functions (HRTFs) are crucial for creating realistic spatial audio experiences in virtual environments. However, individualized HRTFs require complex and time-consuming measurements in specialized acoustic facilities. Non-individual HRTFs, while more accessible, often result in poor spatial audio perception due to individual anatomical differences.",
        "Les fonctions de transfert relatives à la tête (HRTF) sont cruciales pour créer des expériences audio spatiales réalistes dans les environnements virtuels. Cependant, les HRTF individualisées nécessitent des mesures complexes et longues dans des installations acoustiques spécialisées. Les HRTF non individualisées, bien que plus accessibles, entraînent souvent une mauvaise perception audio spatiale en raison des différences anatomiques individuelles.",
    ),
    ("hrtf-goals-title", "Goals", "Objectifs"),
    (
        "hrtf-goals-p1",
        "This research project explores methods for adapting non-individual HRTFs to improve spatial audio perception without requiring individual measurements. The goal is to develop short training protocols that can enhance the effectiveness of generic HRTFs, making high-quality spatial audio more accessible for VR applications, gaming, and assistive technologies.",
        "Ce projet de recherche explore des méthodes pour adapter les HRTF non individualisées afin d'améliorer la perception audio spatiale sans nécessiter de mesures individuelles. L'objectif est de développer des protocoles d'entraînement courts qui peuvent améliorer l'efficacité des HRTF génériques, rendant l'audio spatial de haute qualité plus accessible pour les applications de RV, les jeux et les technologies d'assistance.",
    ),
    ("hrtf-contribution-title", "Contribution", "Contribution"),
    (
        "hrtf-contribution-p1",
        "I developed the HRTF selection methods and the adaptation methods using Unity 3D and specialized audio processing libraries.",
        "J'ai développé les méthodes de sélection des HRTF et les méthodes d'adaptation en utilisant Unity 3D et des bibliothèques de traitement audio spécialisées.",
    ),
    (
        "hrtf-selection-title",
        "Non-individualized HRTF Selection",
        "Sélection de HRTF non individualisées",
    ),
    (
        "hrtf-selection-p1",
        "A first study we conducted revealed that individual differences in the adaptation capacity to non-individual HRTFs was significant and possibly explained by the distance between the user own HRTFs and the non-indivualized HRTFs used in training. To compensate for that, we added a selection phase designed to identify and select the most suitable non-individualized HRTFs for each user.",
        "Une première étude que nous avons menée a révélé que les différences individuelles dans la capacité d'adaptation aux HRTF non individualisées étaient significatives et possiblement expliquées par la distance entre les propres HRTF de l'utilisateur et les HRTF non individualisées utilisées lors de l'entraînement. Pour compenser cela, nous avons ajouté une phase de sélection conçue pour identifier et sélectionner les HRTF non individualisées les plus appropriées pour chaque utilisateur.",
    ),
    (
        "hrtf-selection-p2",
        "The selection test involved 8 differents set of HRTFs. Participants were immersed in a virtual environment where they were visually presented with the expected path of the sound source. They then had to listen and grade the different HRTF sets based on the match between the expected path and the perceived path of the sound source. Three different path were used: a horizontal circle around the user, a vertical circle aroud the user, and a path moving from the front to the back of the user. The HRTFs set with the highest average score was selected for the subsequent adaptation training and localization task.",
        "Le test de sélection impliquait 8 ensembles différents de HRTF. Les participants étaient immergés dans un environnement virtuel où le trajet attendu de la source sonore leur était présenté visuellement. Ils devaient ensuite écouter et noter les différents ensembles de HRTF en fonction de la correspondance entre le trajet attendu et le trajet perçu de la source sonore. Trois trajets différents ont été utilisés : un cercle horizontal autour de l'utilisateur, un cercle vertical autour de l'utilisateur et un trajet se déplaçant de l'avant vers l'arrière de l'utilisateur. L'ensemble de HRTF avec le score moyen le plus élevé était sélectionné pour l'entraînement d'adaptation et la tâche de localisation ultérieurs.",
    ),
    (
        "hrtf-selection-caption",
        "Figure 1: HRTF Selection Tested positions and path",
        "Figure 1 : Positions et trajets testés pour la sélection des HRTF",
    ),
    (
        "hrtf-adaptation-title",
        "Adaptation Methods",
        "Méthodes d'Adaptation",
    ),
    (
        "hrtf-adaptation-p1",
        "The adaptation methods was designed to foster perceptual learning through active listening and feedback in immersive virtual environments. The task was a simple spatial exploration task where the particiants had to actively search and locate an invisible target around them. To do that they had a permanent audio feedback indicating the distance to the target, in the form of a sound pulsing faster as they got closer to the target. In the audiovisual version of the task, they also had a visual feedback, in the form of a glowing orb at the position of the hand changing color depending on the distance to the target.",
        "La méthode d'adaptation a été conçue pour favoriser l'apprentissage perceptif par l'écoute active et le retour d'information dans des environnements virtuels immersifs. La tâche était une simple tâche d'exploration spatiale où les participants devaient rechercher et localiser activement une cible invisible autour d'eux. Pour ce faire, ils disposaient d'un retour audio permanent indiquant la distance à la cible, sous la forme d'un son pulsant plus rapidement à mesure qu'ils se rapprochaient de la cible. Dans la version audiovisuelle de la tâche, ils avaient également un retour visuel, sous la forme d'un orbe lumineux à la position de la main changeant de couleur en fonction de la distance à la cible.",
    ),
    ("hrtf-studies-title", "Perceptual Studies", "Études Perceptives"),
    (
        "hrtf-studies-p1",
        "The localization task was designed to measure the localization accuracy before and after the adaptation training. The participants simply had to point with their hand the position of a sound source.",
        "La tâche de localisation a été conçue pour mesurer la précision de la localisation avant et après l'entraînement d'adaptation. Les participants devaient simplement pointer avec leur main la position d'une source sonore.",
    ),
    (
        "hrtf-pubs-title",
        "Scientific Publications",
        "Publications Scientifiques",
    ),
    ("hrtf-view-pub", "View on Google Scholar", "Voir sur Google Scholar"),
    ("hrtf-back-button", "Back to Portfolio", "Retour au Portfolio"),
];

/// String table built once at startup and shared by the language toggle.
pub struct Translations {
    en: FnvHashMap<&'static str, &'static str>,
    fr: FnvHashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn new() -> Self {
        let mut en = FnvHashMap::default();
        let mut fr = FnvHashMap::default();
        for &(key, english, french) in ENTRIES {
            en.insert(key, english);
            fr.insert(key, french);
        }
        Self { en, fr }
    }

    /// Exact lookup; a missing key yields `None` and the caller leaves the
    /// node untouched.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&'static str> {
        let table = match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        };
        table.get(key).copied()
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}
