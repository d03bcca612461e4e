//! RDF Calendar, the `icaltzd` flavour of iCalendar in RDF (`ical:`).
//!
//! The upstream schema is generated from RFC 2445 and declares some
//! properties once per calendar component that uses them, each time with
//! the component-specific comment. `dtend`, `due` and `action` are therefore
//! declared more than once here; the registry keeps the last declaration.

use crate::model::iris::*;
use crate::model::MetaDecl::{Iri, Iris};
use crate::model::{MetaDecl, TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `ical:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "ical",
            base_uri: "http://www.w3.org/2002/12/cal/icaltzd#",
            label: "iCalendar vocabulary",
            comment: "Calendar data as RDF, following the structure of RFC 2445 \
                      (iCalendar), with time zones expressed as datatypes.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: &[],
    }
}

const CLASSES: &[TermDecl] = &[
    TermDecl::class("Vcalendar")
        .label("VCALENDAR")
        .comment("A calendar object: a collection of calendaring and scheduling \
                  information."),
    TermDecl::class("Vevent")
        .label("VEVENT")
        .comment("Provide a grouping of component properties that describe an event."),
    TermDecl::class("Vtodo")
        .label("VTODO")
        .comment("Provide a grouping of calendar properties that describe a to-do."),
    TermDecl::class("Vjournal")
        .label("VJOURNAL")
        .comment("Provide a grouping of component properties that describe a journal \
                  entry."),
    TermDecl::class("Vfreebusy")
        .label("VFREEBUSY")
        .comment("Provide a grouping of component properties that describe either a request \
                  for free/busy time, describe a response to a request for free/busy time or \
                  describe a published set of busy time."),
    TermDecl::class("Vtimezone")
        .label("VTIMEZONE")
        .comment("Provide a grouping of component properties that defines a time zone."),
    TermDecl::class("Valarm")
        .label("VALARM")
        .comment("Provide a grouping of component properties that define an alarm."),
    TermDecl::class("DomainOf_rrule")
        .label("DomainOf_rrule")
        .comment("Components that may carry a recurrence rule."),
    TermDecl::class("Value_CAL-ADDRESS")
        .label("CAL-ADDRESS")
        .comment("This value type is used to identify properties that contain a calendar \
                  user address."),
    TermDecl::class("Value_DATE")
        .label("DATE")
        .comment("This value type is used to identify values that contain a calendar date."),
    TermDecl::class("Value_DURATION")
        .label("DURATION")
        .comment("This value type is used to identify properties that contain a duration of \
                  time."),
    TermDecl::class("Value_PERIOD")
        .label("PERIOD")
        .comment("This value type is used to identify values that contain a precise period \
                  of time."),
    TermDecl::class("Value_RECUR")
        .label("RECUR")
        .comment("This value type is used to identify properties that contain a recurrence \
                  rule specification."),
    TermDecl::class("List_of_Float")
        .label("List of Float")
        .comment("A list of floating point numbers, used for geographic positions.")
        .meta(&[("subClassOf", Iri(RDF_LIST))]),
];

const EVENT_TODO: &[(&str, MetaDecl)] = &[
    ("domain", Iris(&[
        "http://www.w3.org/2002/12/cal/icaltzd#Vevent",
        "http://www.w3.org/2002/12/cal/icaltzd#Vtodo",
    ])),
];
const COMPONENT_TEXT: &[(&str, MetaDecl)] = &[
    ("domain", Iris(&[
        "http://www.w3.org/2002/12/cal/icaltzd#Vevent",
        "http://www.w3.org/2002/12/cal/icaltzd#Vtodo",
        "http://www.w3.org/2002/12/cal/icaltzd#Vjournal",
    ])),
    ("range", Iri(XSD_STRING)),
];
const DATE_TIME_OR_DATE: &[(&str, MetaDecl)] = &[("range", Iris(&[
    XSD_DATETIME,
    XSD_DATE,
]))];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("component")
        .label("component")
        .comment("A calendar component contained in a VCALENDAR.")
        .meta(&[("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vcalendar"))]),
    TermDecl::property("prodid")
        .label("PRODID")
        .comment("This property specifies the identifier for the product that created the \
                  iCalendar object.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vcalendar")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("version")
        .label("VERSION")
        .comment("This property specifies the identifier corresponding to the highest \
                  version number or the minimum and maximum range of the iCalendar \
                  specification that is required in order to interpret the iCalendar \
                  object.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vcalendar")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("calscale")
        .label("CALSCALE")
        .comment("This property defines the calendar scale used for the calendar \
                  information specified in the iCalendar object.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vcalendar")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("method")
        .label("METHOD")
        .comment("This property defines the iCalendar object method associated with the \
                  calendar object.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vcalendar")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("action")
        .label("ACTION")
        .comment("This property defines the action to be invoked when an alarm is \
                  triggered.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Valarm")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("attach")
        .label("ATTACH")
        .comment("The property provides the capability to associate a document object with \
                  a calendar component."),
    TermDecl::property("attendee")
        .label("ATTENDEE")
        .comment("The property defines an \"Attendee\" within a calendar component.")
        .meta(&[("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_CAL-ADDRESS"))]),
    TermDecl::property("categories")
        .label("CATEGORIES")
        .comment("This property defines the categories for a calendar component.")
        .meta(COMPONENT_TEXT),
    TermDecl::property("class")
        .label("CLASS")
        .comment("This property defines the access classification for a calendar \
                  component.")
        .meta(COMPONENT_TEXT),
    TermDecl::property("comment")
        .label("COMMENT")
        .comment("This property specifies non-processing information intended to provide a \
                  comment to the calendar user.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("completed")
        .label("COMPLETED")
        .comment("This property defines the date and time that a to-do was actually \
                  completed.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vtodo")),
            ("range", Iri(XSD_DATETIME)),
        ]),
    TermDecl::property("contact")
        .label("CONTACT")
        .comment("The property is used to represent contact information or alternately a \
                  reference to contact information associated with the calendar component.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("created")
        .label("CREATED")
        .comment("This property specifies the date and time that the calendar information \
                  was created by the calendar user agent in the calendar store.")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("description")
        .label("DESCRIPTION")
        .comment("This property provides a more complete description of the calendar \
                  component, than that provided by the \"SUMMARY\" property.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("dtend")
        .label("DTEND")
        .comment("This property specifies the date and time that a calendar component ends.")
        .meta(DATE_TIME_OR_DATE),
    TermDecl::property("dtstamp")
        .label("DTSTAMP")
        .comment("The property indicates the date/time that the instance of the iCalendar \
                  object was created.")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("dtstart")
        .label("DTSTART")
        .comment("This property specifies when the calendar component begins.")
        .meta(DATE_TIME_OR_DATE),
    TermDecl::property("due")
        .label("DUE")
        .comment("This property defines the date and time that a to-do is expected to be \
                  completed.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vtodo")),
            ("range", Iris(&[XSD_DATETIME, XSD_DATE])),
        ]),
    TermDecl::property("duration")
        .label("DURATION")
        .comment("The property specifies a positive duration of time.")
        .meta(&[("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_DURATION"))]),
    TermDecl::property("exdate")
        .label("EXDATE")
        .comment("This property defines the list of date/time exceptions for a recurring \
                  calendar component.")
        .meta(DATE_TIME_OR_DATE),
    TermDecl::property("exrule")
        .label("EXRULE")
        .comment("This property defines a rule or repeating pattern for an exception to a \
                  recurrence set.")
        .meta(&[("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_RECUR"))]),
    TermDecl::property("freebusy")
        .label("FREEBUSY")
        .comment("The property defines one or more free or busy time intervals.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vfreebusy")),
            ("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_PERIOD")),
        ]),
    TermDecl::property("geo")
        .label("GEO")
        .comment("This property specifies information related to the global position for \
                  the activity specified by a calendar component.")
        .meta(&[
            ("domain", Iris(&[
                "http://www.w3.org/2002/12/cal/icaltzd#Vevent",
                "http://www.w3.org/2002/12/cal/icaltzd#Vtodo",
            ])),
            ("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#List_of_Float")),
        ]),
    TermDecl::property("lastModified")
        .label("LAST-MODIFIED")
        .comment("The property specifies the date and time that the information associated \
                  with the calendar component was last revised in the calendar store.")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("location")
        .label("LOCATION")
        .comment("The property defines the intended venue for the activity defined by a \
                  calendar component.")
        .meta(EVENT_TODO),
    TermDecl::property("organizer")
        .label("ORGANIZER")
        .comment("The property defines the organizer for a calendar component.")
        .meta(&[("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_CAL-ADDRESS"))]),
    TermDecl::property("percentComplete")
        .label("PERCENT-COMPLETE")
        .comment("This property is used by an assignee or delegatee of a to-do to convey \
                  the percent completion of a to-do to the Organizer.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vtodo")),
            ("range", Iri(XSD_INTEGER)),
        ]),
    TermDecl::property("priority")
        .label("PRIORITY")
        .comment("The property defines the relative priority for a calendar component.")
        .meta(&[("range", Iri(XSD_INTEGER))]),
    TermDecl::property("rdate")
        .label("RDATE")
        .comment("This property defines the list of date/times for a recurrence set.")
        .meta(DATE_TIME_OR_DATE),
    TermDecl::property("recurrenceId")
        .label("RECURRENCE-ID")
        .comment("This property is used in conjunction with the \"UID\" and \"SEQUENCE\" \
                  property to identify a specific instance of a recurring \"VEVENT\", \
                  \"VTODO\" or \"VJOURNAL\" calendar component.")
        .meta(DATE_TIME_OR_DATE),
    TermDecl::property("relatedTo")
        .label("RELATED-TO")
        .comment("The property is used to represent a relationship or reference between one \
                  calendar component and another.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("repeat")
        .label("REPEAT")
        .comment("This property defines the number of time the alarm should be repeated, \
                  after the initial trigger.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Valarm")),
            ("range", Iri(XSD_INTEGER)),
        ]),
    TermDecl::property("resources")
        .label("RESOURCES")
        .comment("This property defines the equipment or resources anticipated for an \
                  activity specified by a calendar entity.")
        .meta(EVENT_TODO),
    TermDecl::property("rrule")
        .label("RRULE")
        .comment("This property defines a rule or repeating pattern for recurring events, \
                  to-dos, or time zone definitions.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#DomainOf_rrule")),
            ("range", Iri("http://www.w3.org/2002/12/cal/icaltzd#Value_RECUR")),
        ]),
    TermDecl::property("sequence")
        .label("SEQUENCE")
        .comment("This property defines the revision sequence number of the calendar \
                  component within a sequence of revisions.")
        .meta(&[("range", Iri(XSD_INTEGER))]),
    TermDecl::property("status")
        .label("STATUS")
        .comment("This property defines the overall status or confirmation for the calendar \
                  component.")
        .meta(COMPONENT_TEXT),
    TermDecl::property("summary")
        .label("SUMMARY")
        .comment("This property defines a short summary or subject for the calendar \
                  component.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("transp")
        .label("TRANSP")
        .comment("This property defines whether an event is transparent or not to busy time \
                  searches.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vevent")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("trigger")
        .label("TRIGGER")
        .comment("This property specifies when an alarm will trigger.")
        .meta(&[("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Valarm"))]),
    TermDecl::property("tzid")
        .label("TZID")
        .comment("This property specifies the text value that uniquely identifies the \
                  \"VTIMEZONE\" calendar component.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vtimezone")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("tzname")
        .label("TZNAME")
        .comment("This property specifies the customary designation for a time zone \
                  description.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("tzoffsetfrom")
        .label("TZOFFSETFROM")
        .comment("This property specifies the offset which is in use prior to this time zone \
                  observance.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("tzoffsetto")
        .label("TZOFFSETTO")
        .comment("This property specifies the offset which is in use in this time zone \
                  observance.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("tzurl")
        .label("TZURL")
        .comment("The TZURL provides a means for a VTIMEZONE component to point to a network \
                  location that can be used to retrieve an up-to-date version of itself.")
        .meta(&[("range", Iri(XSD_ANY_URI))]),
    TermDecl::property("uid")
        .label("UID")
        .comment("This property defines the persistent, globally unique identifier for the \
                  calendar component.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("url")
        .label("URL")
        .comment("This property defines a Uniform Resource Locator (URL) associated with the \
                  iCalendar object.")
        .meta(&[("range", Iri(XSD_ANY_URI))]),
    // Per-component redeclarations carried over from the upstream schema.
    TermDecl::property("dtend")
        .label("DTEND")
        .comment("This property specifies the date and time that a calendar component ends. \
                  Within the \"VFREEBUSY\" calendar component, this property defines the end \
                  date and time for the free or busy time information.")
        .meta(&[
            ("domain", Iris(&[
                "http://www.w3.org/2002/12/cal/icaltzd#Vevent",
                "http://www.w3.org/2002/12/cal/icaltzd#Vfreebusy",
            ])),
            ("range", Iris(&[XSD_DATETIME, XSD_DATE])),
        ]),
    TermDecl::property("due")
        .label("DUE")
        .comment("This property defines the date and time that a to-do is expected to be \
                  completed. The value MUST be a date/time equal to or after the DTSTART \
                  value, if specified.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Vtodo")),
            ("range", Iris(&[XSD_DATETIME, XSD_DATE])),
        ]),
    TermDecl::property("action")
        .label("ACTION")
        .comment("This property defines the action to be invoked when an alarm is \
                  triggered. Applications MUST ignore alarms with x-name and iana-token \
                  values they don't recognize.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2002/12/cal/icaltzd#Valarm")),
            ("range", Iri(XSD_STRING)),
        ]),
];
