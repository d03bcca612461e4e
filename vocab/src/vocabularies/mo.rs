//! The Music Ontology (`mo:`).
//!
//! Builds on FRBR (works, expressions, manifestations, items), FOAF (agents)
//! and the Event and Timeline ontologies. Those references are kept as
//! opaque IRIs.

use crate::model::iris::*;
use crate::model::MetaDecl::{Iri, Lit};
use crate::model::{MetaDecl, TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `mo:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "mo",
            base_uri: "http://purl.org/ontology/mo/",
            label: "Music Ontology",
            comment: "The Music Ontology is an ontology for describing music-related data: \
                      artists, releases, tracks, performances, recordings and signals.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: INDIVIDUALS,
    }
}

const STABLE: (&str, MetaDecl) = ("vs:term_status", Lit("stable"));
const TESTING: (&str, MetaDecl) = ("vs:term_status", Lit("testing"));

const CLASSES: &[TermDecl] = &[
    TermDecl::class("MusicArtist")
        .label("music artist")
        .comment("A person or a group of people (or a computer :-) ), whose musical \
                  creative work shows sensitivity and imagination.")
        .meta(&[("subClassOf", Iri(FOAF_AGENT)), STABLE]),
    TermDecl::class("SoloMusicArtist")
        .label("solo music artist")
        .comment("Single person whose musical creative work shows sensitivity and \
                  imagination.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicArtist")),
            STABLE,
        ]),
    TermDecl::class("MusicGroup")
        .label("music group")
        .comment("Group of people (or a collaboration of several people) whose musical \
                  creative work shows sensitivity and imagination.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicArtist")),
            STABLE,
        ]),
    TermDecl::class("Label")
        .label("label")
        .comment("Trade name of a company that produces musical works or expression of \
                  musical works.")
        .meta(&[("subClassOf", Iri(FOAF_ORGANIZATION)), STABLE]),
    TermDecl::class("Arranger")
        .label("arranger")
        .comment("Someone who arranges a musical work, i.e. adapts it for performance by a \
                  particular ensemble or instruments.")
        .meta(&[("subClassOf", Iri(FOAF_PERSON)), TESTING]),
    TermDecl::class("Composer")
        .label("composer")
        .comment("Someone who wrote a musical work.")
        .meta(&[("subClassOf", Iri(FOAF_PERSON)), TESTING]),
    TermDecl::class("Conductor")
        .label("conductor")
        .comment("Someone who leads a musical performance.")
        .meta(&[("subClassOf", Iri(FOAF_PERSON)), TESTING]),
    TermDecl::class("Performer")
        .label("performer")
        .comment("A performer of a musical performance.")
        .meta(&[("subClassOf", Iri(FOAF_AGENT)), TESTING]),
    TermDecl::class("MusicalWork")
        .label("musical work")
        .comment("Distinct intellectual or artistic musical creation, from the composer's \
                  mind.")
        .meta(&[("subClassOf", Iri(FRBR_WORK)), STABLE]),
    TermDecl::class("Composition")
        .label("composition")
        .comment("A composition event, during which a musical work is created.")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), TESTING]),
    TermDecl::class("Arrangement")
        .label("arrangement")
        .comment("An arrangement event. Takes as agent the arranger, and produces a score.")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), TESTING]),
    TermDecl::class("Performance")
        .label("performance")
        .comment("A performance event. It might include as a factor a score, a musical work \
                  or a musical composition.")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), STABLE]),
    TermDecl::class("Recording")
        .label("recording")
        .comment("A recording event. Takes a sound as a factor to produce a signal.")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), STABLE]),
    TermDecl::class("Sound")
        .label("sound")
        .comment("A physical sound. Can be produced by a performance and captured by a \
                  recording.")
        .meta(&[("subClassOf", Iri(FRBR_EXPRESSION)), TESTING]),
    TermDecl::class("Signal")
        .label("signal")
        .comment("A subclass of MusicalExpression, representing a sound. Realisation of a \
                  MusicalWork.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalExpression")),
            STABLE,
        ]),
    TermDecl::class("AnalogSignal")
        .label("analog signal")
        .comment("An analog signal.")
        .meta(&[("subClassOf", Iri("http://purl.org/ontology/mo/Signal")), TESTING]),
    TermDecl::class("DigitalSignal")
        .label("digital signal")
        .comment("A digital signal.")
        .meta(&[("subClassOf", Iri("http://purl.org/ontology/mo/Signal")), TESTING]),
    TermDecl::class("Score")
        .label("score")
        .comment("Here, we are dealing with the informational object (the MusicalExpression), \
                  not the actually \"printed\" score.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalExpression")),
            TESTING,
        ]),
    TermDecl::class("MusicalExpression")
        .label("musical expression")
        .comment("The intellectual or artistic realization of a work in the form of \
                  alpha-numeric, musical, or choreographic notation, sound, etc.")
        .meta(&[("subClassOf", Iri(FRBR_EXPRESSION)), STABLE]),
    TermDecl::class("MusicalManifestation")
        .label("musical manifestation")
        .comment("This entity is related to the edition/production/publication of a \
                  musical expression.")
        .meta(&[("subClassOf", Iri(FRBR_MANIFESTATION)), STABLE]),
    TermDecl::class("MusicalItem")
        .label("musical item")
        .comment("A single exemplar of a musical expression.")
        .meta(&[("subClassOf", Iri(FRBR_ITEM)), STABLE]),
    TermDecl::class("Record")
        .label("record")
        .comment("A published record (manifestation which first aim is to render the \
                  product of a recording).")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            STABLE,
        ]),
    TermDecl::class("Release")
        .label("release")
        .comment("A specific release, with barcode, box, liner notes, cover art, and a \
                  number of records.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            TESTING,
        ]),
    TermDecl::class("Track")
        .label("track")
        .comment("A track on a particular record.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            STABLE,
        ]),
    TermDecl::class("Medium")
        .label("medium")
        .comment("A means or instrumentality for storing or communicating musical \
                  manifestation.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalItem")),
            TESTING,
        ]),
    TermDecl::class("CD")
        .label("CD")
        .comment("Compact Disc used as medium to record a musical manifestation.")
        .meta(&[("subClassOf", Iri("http://purl.org/ontology/mo/Medium")), TESTING]),
    TermDecl::class("Vinyl")
        .label("vinyl")
        .comment("Vinyl used as medium to record a musical manifestation.")
        .meta(&[("subClassOf", Iri("http://purl.org/ontology/mo/Medium")), TESTING]),
    TermDecl::class("Stream")
        .label("stream")
        .comment("Transmission over a network used as medium to broadcast a musical \
                  manifestation.")
        .meta(&[("subClassOf", Iri("http://purl.org/ontology/mo/Medium")), TESTING]),
    TermDecl::class("Instrument")
        .label("instrument")
        .comment("Any of various devices or contrivances that can be used to produce \
                  musical tones or sound.")
        .meta(&[TESTING]),
    TermDecl::class("Genre")
        .label("genre")
        .comment("An expressive style of music.")
        .meta(&[STABLE]),
    TermDecl::class("Festival")
        .label("festival")
        .comment("A festival - musical/artistic event lasting several days, like Glastonbury, \
                  Rock Am Ring...")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), TESTING]),
    TermDecl::class("Show")
        .label("show")
        .comment("A music show, like a concert, a festival day, a gig...")
        .meta(&[("subClassOf", Iri(EVENT_EVENT)), TESTING]),
    TermDecl::class("ReleaseType")
        .label("release type")
        .comment("Release type of a particular manifestation, such as \"album\" or \
                  \"interview\"...")
        .meta(&[TESTING]),
    TermDecl::class("ReleaseStatus")
        .label("release status")
        .comment("Musical manifestation release status.")
        .meta(&[TESTING]),
    TermDecl::class("Lyrics")
        .label("lyrics")
        .comment("Lyrics of a musical work.")
        .meta(&[
            ("subClassOf", Iri("http://purl.org/ontology/mo/MusicalExpression")),
            TESTING,
        ]),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("member_of")
        .label("member of")
        .comment("Indicates that an artist is a member of a group.")
        .meta(&[
            ("domain", Iri(FOAF_AGENT)),
            ("range", Iri(FOAF_GROUP)),
            ("inverseOf", Iri("http://xmlns.com/foaf/0.1/member")),
            TESTING,
        ]),
    TermDecl::property("member")
        .label("has member")
        .comment("Indicates a member of a musical group.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicGroup")),
            ("range", Iri(FOAF_AGENT)),
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/member")),
            STABLE,
        ]),
    TermDecl::property("collaborated_with")
        .label("collaborated with")
        .comment("Used to relate two collaborating people on a work.")
        .meta(&[
            ("domain", Iri(FOAF_AGENT)),
            ("range", Iri(FOAF_AGENT)),
            TESTING,
        ]),
    TermDecl::property("compiled")
        .label("compiled")
        .comment("Used to relate an person or a group of person who compiled the \
                  manifestation of a musical work.")
        .meta(&[
            ("domain", Iri(FOAF_AGENT)),
            ("range", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            ("inverseOf", Iri("http://purl.org/ontology/mo/compiler")),
            TESTING,
        ]),
    TermDecl::property("compiler")
        .label("compiler")
        .comment("Used to relate the manifestation of a musical work to a person or a group \
                  of person who compiled it.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            ("range", Iri(FOAF_AGENT)),
            TESTING,
        ]),
    TermDecl::property("composer")
        .label("composer")
        .comment("Associates a composition event to the actual composer.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Composition")),
            ("range", Iri(FOAF_AGENT)),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#agent")),
            TESTING,
        ]),
    TermDecl::property("conductor")
        .label("conductor")
        .comment("Relates a performance to the conductor involved.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri(FOAF_AGENT)),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#agent")),
            TESTING,
        ]),
    TermDecl::property("performer")
        .label("performer")
        .comment("Relates a performance to the performers involved.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri(FOAF_AGENT)),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#agent")),
            TESTING,
        ]),
    TermDecl::property("performed")
        .label("performed")
        .comment("Indicates that an agent performed in a performance.")
        .meta(&[
            ("domain", Iri(FOAF_AGENT)),
            ("range", Iri("http://purl.org/ontology/mo/Performance")),
            ("inverseOf", Iri("http://purl.org/ontology/mo/performer")),
            TESTING,
        ]),
    TermDecl::property("produced_work")
        .label("produced work")
        .comment("Associates a composition event to the produced musical work.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Composition")),
            ("range", Iri("http://purl.org/ontology/mo/MusicalWork")),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#product")),
            TESTING,
        ]),
    TermDecl::property("performance_of")
        .label("performance of")
        .comment("Associates a Performance to a musical work or an arrangement that is being \
                  used as a factor in it.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri("http://purl.org/ontology/mo/MusicalWork")),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#factor")),
            TESTING,
        ]),
    TermDecl::property("produced_sound")
        .label("produced sound")
        .comment("Associates a Performance to a physical Sound that is being produced by it.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri("http://purl.org/ontology/mo/Sound")),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#product")),
            TESTING,
        ]),
    TermDecl::property("recorded_as")
        .label("recorded as")
        .comment("This is a shortcut property, allowing to bypass all the Sound/Recording \
                  steps.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri("http://purl.org/ontology/mo/Signal")),
            TESTING,
        ]),
    TermDecl::property("produced_signal")
        .label("produced signal")
        .comment("Associates a Recording to the outputted signal.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Recording")),
            ("range", Iri("http://purl.org/ontology/mo/Signal")),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#product")),
            TESTING,
        ]),
    TermDecl::property("published_as")
        .label("published as")
        .comment("Associates a signal to the published manifestation it is part of.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Signal")),
            ("range", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            TESTING,
        ]),
    TermDecl::property("track")
        .label("track")
        .comment("Indicates a part of a record.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Record")),
            ("range", Iri("http://purl.org/ontology/mo/Track")),
            STABLE,
        ]),
    TermDecl::property("track_number")
        .label("track number")
        .comment("Indicates the position of a track on a record medium (a CD, etc.).")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Track")),
            ("range", Iri(XSD_INT)),
            STABLE,
        ]),
    TermDecl::property("track_count")
        .label("track count")
        .comment("The track count of a record.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Record")),
            ("range", Iri(XSD_INT)),
            TESTING,
        ]),
    TermDecl::property("record")
        .label("record")
        .comment("A record of a release. For example, a release might be made of two \
                  records (two vinyls).")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Release")),
            ("range", Iri("http://purl.org/ontology/mo/Record")),
            TESTING,
        ]),
    TermDecl::property("record_number")
        .label("record number")
        .comment("Indicates the position of a record in a release (e.g. a 2xLP, etc.).")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Record")),
            ("range", Iri(RDFS_LITERAL)),
            TESTING,
        ]),
    TermDecl::property("release_type")
        .label("release type")
        .comment("Relates a musical manifestation to its release type (interview, spoken \
                  word, album, ...).")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            ("range", Iri("http://purl.org/ontology/mo/ReleaseType")),
            STABLE,
        ]),
    TermDecl::property("release_status")
        .label("release status")
        .comment("Relates a musical manifestation to its release status (bootleg, ...).")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            ("range", Iri("http://purl.org/ontology/mo/ReleaseStatus")),
            STABLE,
        ]),
    TermDecl::property("label")
        .label("label")
        .comment("Associates a release event with the label releasing the record.")
        .meta(&[
            ("range", Iri("http://purl.org/ontology/mo/Label")),
            TESTING,
        ]),
    TermDecl::property("genre")
        .label("genre")
        .comment("Associates an event (like a performance or a recording) to a particular \
                  musical genre.")
        .meta(&[
            ("range", Iri("http://purl.org/ontology/mo/Genre")),
            STABLE,
        ]),
    TermDecl::property("instrument")
        .label("instrument")
        .comment("Relates a performance to a musical instrument involved.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Performance")),
            ("range", Iri("http://purl.org/ontology/mo/Instrument")),
            ("subPropertyOf", Iri("http://purl.org/NET/c4dm/event.owl#factor")),
            TESTING,
        ]),
    TermDecl::property("lyrics")
        .label("lyrics")
        .comment("Associates lyrics with a musical work.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalWork")),
            ("range", Iri("http://purl.org/ontology/mo/Lyrics")),
            TESTING,
        ]),
    TermDecl::property("bpm")
        .label("bpm")
        .comment("Indicates the BPM of a MusicalWork or a particular Performance. Beats per \
                  minute: the pace of music measured by the number of beats occurring in 60 \
                  seconds.")
        .meta(&[("range", Iri(RDFS_LITERAL)), TESTING]),
    TermDecl::property("duration")
        .label("duration")
        .comment("The duration of a track or a signal in ms.")
        .meta(&[("range", Iri(XSD_FLOAT)), TESTING]),
    TermDecl::property("sample_rate")
        .label("sample rate")
        .comment("Associates a digital signal to its sample rate. It might be easier to \
                  express it this way instead of defining a timeline map.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/DigitalSignal")),
            ("range", Iri(XSD_FLOAT)),
            TESTING,
        ]),
    TermDecl::property("bitsPerSample")
        .label("bits per sample")
        .comment("Associates a digital signal to the number a bits used to encode one \
                  sample.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/DigitalSignal")),
            ("range", Iri(XSD_INT)),
            TESTING,
        ]),
    TermDecl::property("time")
        .label("time")
        .comment("Time interval of a signal or a track.")
        .meta(&[("range", Iri(TL_INTERVAL)), TESTING]),
    TermDecl::property("isrc")
        .label("isrc")
        .comment("The ISRC (International Standard Recording Code) is the international \
                  identification system for sound recordings and music videorecordings.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Signal")),
            ("range", Iri(RDFS_LITERAL)),
            STABLE,
        ]),
    TermDecl::property("iswc")
        .label("iswc")
        .comment("Links a musical work to the corresponding ISWC number.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalWork")),
            ("range", Iri(RDFS_LITERAL)),
            TESTING,
        ]),
    TermDecl::property("ean")
        .label("ean")
        .comment("The European Article Number (EAN) is a universal identifier for \
                  products, commonly printed in form of barcodes on them.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/MusicalManifestation")),
            ("range", Iri(RDFS_LITERAL)),
            TESTING,
        ]),
    TermDecl::property("catalogue_number")
        .label("catalogue number")
        .comment("Links a release with the corresponding catalogue number.")
        .meta(&[
            ("domain", Iri("http://purl.org/ontology/mo/Release")),
            ("range", Iri(XSD_STRING)),
            TESTING,
        ]),
    TermDecl::property("musicbrainz_guid")
        .label("MusicBrainz GUID")
        .comment("Links an object to the corresponding MusicBrainz identifier.")
        .meta(&[("range", Iri(XSD_STRING)), TESTING]),
    TermDecl::property("homepage")
        .label("homepage")
        .comment("Links a resource to its homepage.")
        .meta(&[
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/homepage")),
            ("range", Iri(FOAF_DOCUMENT)),
            TESTING,
        ]),
    TermDecl::property("image")
        .label("image")
        .comment("Indicates a pictorial image (JPEG, GIF, PNG, Etc.) of a musical work, the \
                  expression of a musical work, the manifestation of a work or the \
                  examplar of a manifestation.")
        .meta(&[
            ("range", Iri(FOAF_IMAGE)),
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/depiction")),
            TESTING,
        ]),
    TermDecl::property("wikipedia")
        .label("wikipedia")
        .comment("Used to link an work, an expression of a work, a manifestation of a work, \
                  a person, an instrument or a musical genre to its corresponding Wikipedia \
                  page.")
        .meta(&[
            ("range", Iri(FOAF_DOCUMENT)),
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/page")),
            TESTING,
        ]),
    TermDecl::property("discogs")
        .label("discogs")
        .comment("Used to link a musical work or the expression of a musical work, an \
                  artist or a corporate body to to its corresponding Discogs page.")
        .meta(&[
            ("range", Iri(FOAF_DOCUMENT)),
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/page")),
            TESTING,
        ]),
];

const INDIVIDUALS: &[TermDecl] = &[
    TermDecl::individual("album")
        .label("album")
        .comment("One or more track issued together.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseType"))]),
    TermDecl::individual("single")
        .label("single")
        .comment("A single is a release with one or a few tracks, usually promoting an \
                  upcoming album.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseType"))]),
    TermDecl::individual("ep")
        .label("ep")
        .comment("An EP is a so-called \"Extended Play\" release.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseType"))]),
    TermDecl::individual("compilation")
        .label("compilation")
        .comment("A compilation of tracks from various sources.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseType"))]),
    TermDecl::individual("live")
        .label("live")
        .comment("A release recorded live.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseType"))]),
    TermDecl::individual("official")
        .label("official")
        .comment("Any release officially sanctioned by the artist and/or their record \
                  company.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseStatus"))]),
    TermDecl::individual("bootleg")
        .label("bootleg")
        .comment("An unofficial/underground release that was not sanctioned by the artist \
                  and/or the record company.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseStatus"))]),
    TermDecl::individual("promotion")
        .label("promotion")
        .comment("A giveaway release or a release intended to promote an upcoming official \
                  release.")
        .meta(&[("type", Iri("http://purl.org/ontology/mo/ReleaseStatus"))]),
];
