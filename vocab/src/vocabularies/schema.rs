//! Schema.org core vocabulary (`schema:`).
//!
//! Properties use `schema:domainIncludes` / `schema:rangeIncludes` instead of
//! `rdfs:domain` / `rdfs:range`; both are lists of IRIs.

use crate::model::MetaDecl::{Iri, Iris, Lit};
use crate::model::{TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `schema:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "schema",
            base_uri: "http://schema.org/",
            label: "Schema.org",
            comment: "Schema.org is a collaborative community activity with a mission to \
                      create, maintain, and promote schemas for structured data on the \
                      Internet.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: DATATYPES,
    }
}

const THING: &str = "http://schema.org/Thing";
const PERSON: &str = "http://schema.org/Person";
const ORGANIZATION: &str = "http://schema.org/Organization";
const CREATIVE_WORK: &str = "http://schema.org/CreativeWork";
const EVENT: &str = "http://schema.org/Event";
const PLACE: &str = "http://schema.org/Place";
const PRODUCT: &str = "http://schema.org/Product";
const OFFER: &str = "http://schema.org/Offer";
const POSTAL_ADDRESS: &str = "http://schema.org/PostalAddress";
const CONTACT_POINT: &str = "http://schema.org/ContactPoint";
const IMAGE_OBJECT: &str = "http://schema.org/ImageObject";
const STRUCTURED_VALUE: &str = "http://schema.org/StructuredValue";
const INTANGIBLE: &str = "http://schema.org/Intangible";
const MEDIA_OBJECT: &str = "http://schema.org/MediaObject";
const RATING: &str = "http://schema.org/Rating";
const REVIEW: &str = "http://schema.org/Review";

const TEXT: &str = "http://schema.org/Text";
const URL: &str = "http://schema.org/URL";
const DATE: &str = "http://schema.org/Date";
const DATE_TIME: &str = "http://schema.org/DateTime";
const NUMBER: &str = "http://schema.org/Number";
const INTEGER: &str = "http://schema.org/Integer";
const DURATION: &str = "http://schema.org/Duration";

const CLASSES: &[TermDecl] = &[
    TermDecl::class("Thing")
        .label("Thing")
        .comment("The most generic type of item."),
    TermDecl::class("Action")
        .label("Action")
        .comment("An action performed by a direct agent and indirect participants upon a \
                  direct object.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("CreativeWork")
        .label("CreativeWork")
        .comment("The most generic kind of creative work, including books, movies, \
                  photographs, software programs, etc.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Event")
        .label("Event")
        .comment("An event happening at a certain time and location, such as a concert, \
                  lecture, or festival.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Intangible")
        .label("Intangible")
        .comment("A utility class that serves as the umbrella for a number of 'intangible' \
                  things such as quantities, structured values, etc.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Organization")
        .label("Organization")
        .comment("An organization such as a school, NGO, corporation, club, etc.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Person")
        .label("Person")
        .comment("A person (alive, dead, undead, or fictional).")
        .meta(&[
            ("subClassOf", Iri(THING)),
            ("equivalentClass", Iri("http://xmlns.com/foaf/0.1/Person")),
        ]),
    TermDecl::class("Place")
        .label("Place")
        .comment("Entities that have a somewhat fixed, physical extension.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Product")
        .label("Product")
        .comment("Any offered product or service. For example: a pair of shoes; a concert \
                  ticket; the rental of a car; a haircut; or an episode of a TV show \
                  streamed online.")
        .meta(&[("subClassOf", Iri(THING))]),
    TermDecl::class("Article")
        .label("Article")
        .comment("An article, such as a news article or piece of investigative report.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("NewsArticle")
        .label("NewsArticle")
        .comment("A NewsArticle is an article whose content reports news, or provides \
                  background context and supporting materials for understanding the news.")
        .meta(&[("subClassOf", Iri("http://schema.org/Article"))]),
    TermDecl::class("BlogPosting")
        .label("BlogPosting")
        .comment("A blog post.")
        .meta(&[("subClassOf", Iri("http://schema.org/SocialMediaPosting"))]),
    TermDecl::class("SocialMediaPosting")
        .label("SocialMediaPosting")
        .comment("A post to a social media platform, including blog posts, tweets, Facebook \
                  posts, etc.")
        .meta(&[("subClassOf", Iri("http://schema.org/Article"))]),
    TermDecl::class("Book")
        .label("Book")
        .comment("A book.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("Comment")
        .label("Comment")
        .comment("A comment on an item - for example, a comment on a blog post.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("WebPage")
        .label("WebPage")
        .comment("A web page. Every web page is implicitly assumed to be declared to be of \
                  type WebPage.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("WebSite")
        .label("WebSite")
        .comment("A WebSite is a set of related web pages and other items typically served \
                  from a single web domain and accessible via URLs.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("MediaObject")
        .label("MediaObject")
        .comment("A media object, such as an image, video, or audio object embedded in a web \
                  page or a downloadable dataset.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("ImageObject")
        .label("ImageObject")
        .comment("An image file.")
        .meta(&[("subClassOf", Iri(MEDIA_OBJECT))]),
    TermDecl::class("AudioObject")
        .label("AudioObject")
        .comment("An audio file.")
        .meta(&[("subClassOf", Iri(MEDIA_OBJECT))]),
    TermDecl::class("VideoObject")
        .label("VideoObject")
        .comment("A video file.")
        .meta(&[("subClassOf", Iri(MEDIA_OBJECT))]),
    TermDecl::class("MusicRecording")
        .label("MusicRecording")
        .comment("A music recording (track), usually a single song.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("MusicGroup")
        .label("MusicGroup")
        .comment("A musical group, such as a band, an orchestra, or a choir. Can also be a \
                  solo musician.")
        .meta(&[("subClassOf", Iri("http://schema.org/PerformingGroup"))]),
    TermDecl::class("PerformingGroup")
        .label("PerformingGroup")
        .comment("A performance group, such as a band, an orchestra, or a circus.")
        .meta(&[("subClassOf", Iri(ORGANIZATION))]),
    TermDecl::class("Corporation")
        .label("Corporation")
        .comment("Organization: A business corporation.")
        .meta(&[("subClassOf", Iri(ORGANIZATION))]),
    TermDecl::class("LocalBusiness")
        .label("LocalBusiness")
        .comment("A particular physical business or branch of an organization. Examples of \
                  LocalBusiness include a restaurant, a particular branch of a restaurant \
                  chain, a branch of a bank, a medical practice, a club, a bowling alley, etc.")
        .meta(&[("subClassOf", Iris(&[ORGANIZATION, PLACE]))]),
    TermDecl::class("Restaurant")
        .label("Restaurant")
        .comment("A restaurant.")
        .meta(&[("subClassOf", Iri("http://schema.org/FoodEstablishment"))]),
    TermDecl::class("FoodEstablishment")
        .label("FoodEstablishment")
        .comment("A food-related business.")
        .meta(&[("subClassOf", Iri("http://schema.org/LocalBusiness"))]),
    TermDecl::class("City")
        .label("City")
        .comment("A city or town.")
        .meta(&[("subClassOf", Iri("http://schema.org/AdministrativeArea"))]),
    TermDecl::class("Country")
        .label("Country")
        .comment("A country.")
        .meta(&[("subClassOf", Iri("http://schema.org/AdministrativeArea"))]),
    TermDecl::class("AdministrativeArea")
        .label("AdministrativeArea")
        .comment("A geographical region, typically under the jurisdiction of a particular \
                  government.")
        .meta(&[("subClassOf", Iri(PLACE))]),
    TermDecl::class("MusicEvent")
        .label("MusicEvent")
        .comment("Event type: Music event.")
        .meta(&[("subClassOf", Iri(EVENT))]),
    TermDecl::class("StructuredValue")
        .label("StructuredValue")
        .comment("Structured values are used when the value of a property has a more complex \
                  structure than simply being a textual value or a reference to another thing.")
        .meta(&[("subClassOf", Iri(INTANGIBLE))]),
    TermDecl::class("ContactPoint")
        .label("ContactPoint")
        .comment("A contact point, for example, a Customer Complaints department.")
        .meta(&[("subClassOf", Iri(STRUCTURED_VALUE))]),
    TermDecl::class("PostalAddress")
        .label("PostalAddress")
        .comment("The mailing address.")
        .meta(&[("subClassOf", Iri(CONTACT_POINT))]),
    TermDecl::class("GeoCoordinates")
        .label("GeoCoordinates")
        .comment("The geographic coordinates of a place or event.")
        .meta(&[("subClassOf", Iri(STRUCTURED_VALUE))]),
    TermDecl::class("Offer")
        .label("Offer")
        .comment("An offer to transfer some rights to an item or to provide a service, for \
                  example, an offer to sell tickets to an event, to rent the DVD of a movie, \
                  to stream a TV show over the internet, to repair a motorcycle, or to loan a \
                  book.")
        .meta(&[
            ("subClassOf", Iri(INTANGIBLE)),
            ("equivalentClass", Iri("http://purl.org/goodrelations/v1#Offering")),
        ]),
    TermDecl::class("Rating")
        .label("Rating")
        .comment("A rating is an evaluation on a numeric scale, such as 1 to 5 stars.")
        .meta(&[("subClassOf", Iri(INTANGIBLE))]),
    TermDecl::class("AggregateRating")
        .label("AggregateRating")
        .comment("The average rating based on multiple ratings or reviews.")
        .meta(&[("subClassOf", Iri(RATING))]),
    TermDecl::class("Review")
        .label("Review")
        .comment("A review of an item - for example, of a restaurant, movie, or store.")
        .meta(&[("subClassOf", Iri(CREATIVE_WORK))]),
    TermDecl::class("Brand")
        .label("Brand")
        .comment("A brand is a name used by an organization or business person for labeling \
                  a product, product group, or similar.")
        .meta(&[("subClassOf", Iri(INTANGIBLE))]),
    TermDecl::class("ItemList")
        .label("ItemList")
        .comment("A list of items of any sort.")
        .meta(&[("subClassOf", Iri(INTANGIBLE))]),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("name")
        .label("name")
        .comment("The name of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
            ("subPropertyOf", Iri("http://www.w3.org/2000/01/rdf-schema#label")),
        ]),
    TermDecl::property("description")
        .label("description")
        .comment("A description of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("url")
        .label("url")
        .comment("URL of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[URL])),
        ]),
    TermDecl::property("image")
        .label("image")
        .comment("An image of the item. This can be a URL or a fully described ImageObject.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[IMAGE_OBJECT, URL])),
        ]),
    TermDecl::property("sameAs")
        .label("sameAs")
        .comment("URL of a reference Web page that unambiguously indicates the item's \
                  identity.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[URL])),
        ]),
    TermDecl::property("alternateName")
        .label("alternateName")
        .comment("An alias for the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("identifier")
        .label("identifier")
        .comment("The identifier property represents any kind of identifier for any kind of \
                  Thing, such as ISBNs, GTIN codes, UUIDs etc.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[TEXT, URL])),
        ]),
    TermDecl::property("givenName")
        .label("givenName")
        .comment("Given name. In the U.S., the first name of a Person.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("familyName")
        .label("familyName")
        .comment("Family name. In the U.S., the last name of a Person.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("additionalName")
        .label("additionalName")
        .comment("An additional name for a Person, can be used for a middle name.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("birthDate")
        .label("birthDate")
        .comment("Date of birth.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[DATE])),
        ]),
    TermDecl::property("deathDate")
        .label("deathDate")
        .comment("Date of death.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[DATE])),
        ]),
    TermDecl::property("email")
        .label("email")
        .comment("Email address.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON, ORGANIZATION, CONTACT_POINT])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("telephone")
        .label("telephone")
        .comment("The telephone number.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON, ORGANIZATION, PLACE, CONTACT_POINT])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("address")
        .label("address")
        .comment("Physical address of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON, ORGANIZATION, PLACE])),
            ("schema:rangeIncludes", Iris(&[POSTAL_ADDRESS, TEXT])),
        ]),
    TermDecl::property("jobTitle")
        .label("jobTitle")
        .comment("The job title of the person (for example, Financial Manager).")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("worksFor")
        .label("worksFor")
        .comment("Organizations that the person works for.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[ORGANIZATION])),
        ]),
    TermDecl::property("knows")
        .label("knows")
        .comment("The most generic bi-directional social/work relation.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON])),
            ("schema:rangeIncludes", Iris(&[PERSON])),
        ]),
    TermDecl::property("memberOf")
        .label("memberOf")
        .comment("An Organization (or ProgramMembership) to which this Person or \
                  Organization belongs.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON, ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[ORGANIZATION])),
            ("inverseOf", Iri("http://schema.org/member")),
        ]),
    TermDecl::property("member")
        .label("member")
        .comment("A member of an Organization or a ProgramMembership. Organizations can be \
                  members of organizations; ProgramMembership is typically for individuals.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
            ("inverseOf", Iri("http://schema.org/memberOf")),
        ]),
    TermDecl::property("founder")
        .label("founder")
        .comment("A person who founded this organization.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[PERSON])),
        ]),
    TermDecl::property("foundingDate")
        .label("foundingDate")
        .comment("The date that this organization was founded.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[DATE])),
        ]),
    TermDecl::property("logo")
        .label("logo")
        .comment("An associated logo.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[ORGANIZATION, PLACE, PRODUCT])),
            ("schema:rangeIncludes", Iris(&[IMAGE_OBJECT, URL])),
            ("subPropertyOf", Iri("http://schema.org/image")),
        ]),
    TermDecl::property("contactPoint")
        .label("contactPoint")
        .comment("A contact point for a person or organization.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PERSON, ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[CONTACT_POINT])),
        ]),
    TermDecl::property("author")
        .label("author")
        .comment("The author of this content or rating.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK, RATING])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("creator")
        .label("creator")
        .comment("The creator/author of this CreativeWork.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("publisher")
        .label("publisher")
        .comment("The publisher of the creative work.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("datePublished")
        .label("datePublished")
        .comment("Date of first broadcast/publication.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[DATE, DATE_TIME])),
        ]),
    TermDecl::property("dateModified")
        .label("dateModified")
        .comment("The date on which the CreativeWork was most recently modified.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[DATE, DATE_TIME])),
        ]),
    TermDecl::property("headline")
        .label("headline")
        .comment("Headline of the article.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("articleBody")
        .label("articleBody")
        .comment("The actual body of the article.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/Article"])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("keywords")
        .label("keywords")
        .comment("Keywords or tags used to describe this content. Multiple entries in a \
                  keywords list are typically delimited by commas.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK, ORGANIZATION, PLACE, PRODUCT, EVENT])),
            ("schema:rangeIncludes", Iris(&[TEXT, URL])),
        ]),
    TermDecl::property("inLanguage")
        .label("inLanguage")
        .comment("The language of the content or performance or used in an action. Please use \
                  one of the language codes from the IETF BCP 47 standard.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK, EVENT])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("isbn")
        .label("isbn")
        .comment("The ISBN of the book.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/Book"])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("numberOfPages")
        .label("numberOfPages")
        .comment("The number of pages in the book.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/Book"])),
            ("schema:rangeIncludes", Iris(&[INTEGER])),
        ]),
    TermDecl::property("contentUrl")
        .label("contentUrl")
        .comment("Actual bytes of the media object, for example the image file or video file.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[MEDIA_OBJECT])),
            ("schema:rangeIncludes", Iris(&[URL])),
        ]),
    TermDecl::property("encodingFormat")
        .label("encodingFormat")
        .comment("Media type typically expressed using a MIME format.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[MEDIA_OBJECT, CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[TEXT, URL])),
        ]),
    TermDecl::property("duration")
        .label("duration")
        .comment("The duration of the item (movie, audio recording, event, etc.) in ISO 8601 \
                  date format.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[MEDIA_OBJECT, EVENT, "http://schema.org/MusicRecording"])),
            ("schema:rangeIncludes", Iris(&[DURATION])),
        ]),
    TermDecl::property("byArtist")
        .label("byArtist")
        .comment("The artist that performed this album or recording.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/MusicRecording"])),
            ("schema:rangeIncludes", Iris(&[PERSON, "http://schema.org/MusicGroup"])),
        ]),
    TermDecl::property("startDate")
        .label("startDate")
        .comment("The start date and time of the item (in ISO 8601 date format).")
        .meta(&[
            ("schema:domainIncludes", Iris(&[EVENT])),
            ("schema:rangeIncludes", Iris(&[DATE, DATE_TIME])),
        ]),
    TermDecl::property("endDate")
        .label("endDate")
        .comment("The end date and time of the item (in ISO 8601 date format).")
        .meta(&[
            ("schema:domainIncludes", Iris(&[EVENT])),
            ("schema:rangeIncludes", Iris(&[DATE, DATE_TIME])),
        ]),
    TermDecl::property("location")
        .label("location")
        .comment("The location of, for example, where an event is happening, where an \
                  organization is located, or where an action takes place.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[EVENT, ORGANIZATION])),
            ("schema:rangeIncludes", Iris(&[PLACE, POSTAL_ADDRESS, TEXT])),
        ]),
    TermDecl::property("organizer")
        .label("organizer")
        .comment("An organizer of an Event.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[EVENT])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("performer")
        .label("performer")
        .comment("A performer at the event - for example, a presenter, musician, musical group \
                  or actor.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[EVENT])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("geo")
        .label("geo")
        .comment("The geo coordinates of the place.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PLACE])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/GeoCoordinates"])),
        ]),
    TermDecl::property("latitude")
        .label("latitude")
        .comment("The latitude of a location. For example 37.42242 (WGS 84).")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/GeoCoordinates", PLACE])),
            ("schema:rangeIncludes", Iris(&[NUMBER, TEXT])),
        ]),
    TermDecl::property("longitude")
        .label("longitude")
        .comment("The longitude of a location. For example -122.08585 (WGS 84).")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/GeoCoordinates", PLACE])),
            ("schema:rangeIncludes", Iris(&[NUMBER, TEXT])),
        ]),
    TermDecl::property("streetAddress")
        .label("streetAddress")
        .comment("The street address. For example, 1600 Amphitheatre Pkwy.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[POSTAL_ADDRESS])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("addressLocality")
        .label("addressLocality")
        .comment("The locality in which the street address is, and which is in the region. \
                  For example, Mountain View.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[POSTAL_ADDRESS])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("addressRegion")
        .label("addressRegion")
        .comment("The region in which the locality is, and which is in the country. For \
                  example, California.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[POSTAL_ADDRESS])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("postalCode")
        .label("postalCode")
        .comment("The postal code. For example, 94043.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[POSTAL_ADDRESS])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("addressCountry")
        .label("addressCountry")
        .comment("The country. For example, USA. You can also provide the two-letter ISO \
                  3166-1 alpha-2 country code.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[POSTAL_ADDRESS])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/Country", TEXT])),
        ]),
    TermDecl::property("offers")
        .label("offers")
        .comment("An offer to provide this item - for example, an offer to sell a product, \
                  rent the DVD of a movie, perform a service, or give away tickets to an event.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, EVENT, CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[OFFER])),
        ]),
    TermDecl::property("price")
        .label("price")
        .comment("The offer price of a product, or of a price component when attached to \
                  PriceSpecification and its subtypes.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[OFFER])),
            ("schema:rangeIncludes", Iris(&[NUMBER, TEXT])),
        ]),
    TermDecl::property("priceCurrency")
        .label("priceCurrency")
        .comment("The currency of the price, or a price component when attached to \
                  PriceSpecification and its subtypes. Use standard formats: ISO 4217 \
                  currency format.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[OFFER])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
        ]),
    TermDecl::property("availability")
        .label("availability")
        .comment("The availability of this item - for example In stock, Out of stock, \
                  Pre-order, etc.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[OFFER])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/ItemAvailability"])),
        ]),
    TermDecl::property("seller")
        .label("seller")
        .comment("An entity which offers (sells / leases / lends / loans) the services / goods.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[OFFER])),
            ("schema:rangeIncludes", Iris(&[PERSON, ORGANIZATION])),
        ]),
    TermDecl::property("itemOffered")
        .label("itemOffered")
        .comment("An item being offered (or demanded).")
        .meta(&[
            ("schema:domainIncludes", Iris(&[OFFER])),
            ("schema:rangeIncludes", Iris(&[PRODUCT, "http://schema.org/Service", EVENT])),
            ("inverseOf", Iri("http://schema.org/offers")),
        ]),
    TermDecl::property("brand")
        .label("brand")
        .comment("The brand(s) associated with a product or service, or the brand(s) \
                  maintained by an organization or business person.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, ORGANIZATION, PERSON])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/Brand", ORGANIZATION])),
        ]),
    TermDecl::property("sku")
        .label("sku")
        .comment("The Stock Keeping Unit (SKU), i.e. a merchant-specific identifier for a \
                  product or service.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, OFFER])),
            ("schema:rangeIncludes", Iris(&[TEXT])),
            ("subPropertyOf", Iri("http://schema.org/identifier")),
        ]),
    TermDecl::property("aggregateRating")
        .label("aggregateRating")
        .comment("The overall rating, based on a collection of reviews or ratings, of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, CREATIVE_WORK, ORGANIZATION, PLACE, EVENT])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/AggregateRating"])),
        ]),
    TermDecl::property("review")
        .label("review")
        .comment("A review of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, CREATIVE_WORK, ORGANIZATION, PLACE])),
            ("schema:rangeIncludes", Iris(&[REVIEW])),
        ]),
    TermDecl::property("reviewRating")
        .label("reviewRating")
        .comment("The rating given in this review.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[REVIEW])),
            ("schema:rangeIncludes", Iris(&[RATING])),
        ]),
    TermDecl::property("ratingValue")
        .label("ratingValue")
        .comment("The rating for the content.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[RATING])),
            ("schema:rangeIncludes", Iris(&[NUMBER, TEXT])),
        ]),
    TermDecl::property("reviewCount")
        .label("reviewCount")
        .comment("The count of total number of reviews.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/AggregateRating"])),
            ("schema:rangeIncludes", Iris(&[INTEGER])),
        ]),
    TermDecl::property("itemListElement")
        .label("itemListElement")
        .comment("For itemListElement values, you can use simple strings (e.g. \"Peter\", \
                  \"Paul\", \"Mary\"), existing entities, or use ListItem.")
        .meta(&[
            ("schema:domainIncludes", Iris(&["http://schema.org/ItemList"])),
            ("schema:rangeIncludes", Iris(&[THING, TEXT])),
        ]),
    TermDecl::property("comment")
        .label("comment")
        .comment("Comments, typically from users.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&["http://schema.org/Comment"])),
        ]),
    TermDecl::property("mainEntityOfPage")
        .label("mainEntityOfPage")
        .comment("Indicates a page (or other CreativeWork) for which this thing is the main \
                  entity being described.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[THING])),
            ("schema:rangeIncludes", Iris(&[CREATIVE_WORK, URL])),
            ("inverseOf", Iri("http://schema.org/mainEntity")),
        ]),
    TermDecl::property("mainEntity")
        .label("mainEntity")
        .comment("Indicates the primary entity described in some page or other CreativeWork.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK])),
            ("schema:rangeIncludes", Iris(&[THING])),
            ("subPropertyOf", Iri("http://schema.org/about")),
        ]),
    TermDecl::property("about")
        .label("about")
        .comment("The subject matter of the content.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[CREATIVE_WORK, EVENT])),
            ("schema:rangeIncludes", Iris(&[THING])),
        ]),
    TermDecl::property("reviews")
        .label("reviews")
        .comment("Review of the item.")
        .meta(&[
            ("schema:domainIncludes", Iris(&[PRODUCT, CREATIVE_WORK, ORGANIZATION, PLACE])),
            ("schema:rangeIncludes", Iris(&[REVIEW])),
            ("schema:supersededBy", Iri("http://schema.org/review")),
            ("owl:deprecated", Lit("true")),
        ]),
];

const DATATYPES: &[TermDecl] = &[
    TermDecl::datatype("Boolean")
        .label("Boolean")
        .comment("Boolean: True or False."),
    TermDecl::datatype("Date")
        .label("Date")
        .comment("A date value in ISO 8601 date format."),
    TermDecl::datatype("DateTime")
        .label("DateTime")
        .comment("A combination of date and time of day in the form \
                  [-]CCYY-MM-DDThh:mm:ss[Z|(+|-)hh:mm] (see Chapter 5.4 of ISO 8601)."),
    TermDecl::datatype("Duration")
        .label("Duration")
        .comment("Quantity: Duration (use ISO 8601 duration format)."),
    TermDecl::datatype("Number")
        .label("Number")
        .comment("Data type: Number."),
    TermDecl::datatype("Integer")
        .label("Integer")
        .comment("Data type: Integer.")
        .meta(&[("subClassOf", Iri(NUMBER))]),
    TermDecl::datatype("Text")
        .label("Text")
        .comment("Data type: Text."),
    TermDecl::datatype("Time")
        .label("Time")
        .comment("A point in time recurring on multiple days in the form \
                  hh:mm:ss[Z|(+|-)hh:mm]."),
    TermDecl::datatype("URL")
        .label("URL")
        .comment("Data type: URL.")
        .meta(&[("subClassOf", Iri(TEXT))]),
];
